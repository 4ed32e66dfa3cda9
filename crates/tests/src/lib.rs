#[cfg(test)]
mod common;

#[cfg(test)]
mod search_request_tests;

#[cfg(test)]
mod fetch_cycle_tests;


#[cfg(test)]
mod session_gate_tests;
