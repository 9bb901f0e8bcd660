mod accept_tests;
mod negotiator_tests;
