//! Cross-store integration flows.

#[cfg(test)]
mod fixtures;

mod http_e2e;
mod inquiry_flows;
mod reference_flows;
mod session_flows;
