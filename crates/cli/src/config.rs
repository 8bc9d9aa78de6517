use huddle_graph::ClosureStrategy;

pub(crate) const CLOSURE_MODE_ENV: &str = "HUDDLE_CLOSURE_MODE";

fn parse_closure_strategy(raw: Option<&str>, default_value: ClosureStrategy) -> ClosureStrategy {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(ClosureStrategy::from_name)
        .unwrap_or(default_value)
}

pub(crate) fn closure_strategy_from_env() -> ClosureStrategy {
    let raw = std::env::var(CLOSURE_MODE_ENV).ok();
    if let Some(value) = raw.as_deref() {
        if ClosureStrategy::from_name(value).is_none() && !value.trim().is_empty() {
            log::warn!("Ignoring unknown {CLOSURE_MODE_ENV}={value:?}");
        }
    }
    parse_closure_strategy(raw.as_deref(), ClosureStrategy::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_closure_strategy_defaults_and_trims() {
        let default_value = ClosureStrategy::SinglePass;
        assert_eq!(parse_closure_strategy(None, default_value), default_value);
        assert_eq!(parse_closure_strategy(Some(""), default_value), default_value);
        assert_eq!(parse_closure_strategy(Some("   "), default_value), default_value);
        assert_eq!(
            parse_closure_strategy(Some("exact"), default_value),
            ClosureStrategy::Exact
        );
        assert_eq!(
            parse_closure_strategy(Some(" Exact "), default_value),
            ClosureStrategy::Exact
        );
        assert_eq!(
            parse_closure_strategy(Some("single-pass"), ClosureStrategy::Exact),
            ClosureStrategy::SinglePass
        );
        assert_eq!(parse_closure_strategy(Some("bogus"), default_value), default_value);
    }
}
