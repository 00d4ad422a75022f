mod bdd_steps;
mod test_helpers;
