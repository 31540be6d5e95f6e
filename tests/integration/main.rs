mod helpers;
mod test_smoke_flows;
