mod helpers;
mod history_flow;
mod input_scenarios;
mod invariants;
