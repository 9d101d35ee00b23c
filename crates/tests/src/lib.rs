#[cfg(test)]
mod session_tests;

#[cfg(test)]
mod login_flow_tests;

#[cfg(test)]
mod signup_validation_tests;

#[cfg(test)]
mod role_routing_tests;

#[cfg(test)]
mod navigation_tests;
