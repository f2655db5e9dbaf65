pub mod dashboard;

#[cfg(test)]
mod dashboard_test;
