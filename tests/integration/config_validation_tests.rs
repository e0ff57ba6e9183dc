//! Configuration validation integration tests
//!
//! Parses real argument vectors and checks the resulting configuration.

#[cfg(test)]
mod tests {
    use crate::{assert_err, assert_ok};
    use clap::Parser;
    use sensu_consul_check::{CheckArgs, CheckError, Config, QueryMode};

    fn config_from(args: &[&str]) -> Config {
        let mut argv = vec!["sensu-consul-check", "--consul-server", "http://127.0.0.1:8500"];
        argv.extend_from_slice(args);
        let args = assert_ok!(CheckArgs::try_parse_from(argv));
        Config::from_args(&args)
    }

    #[test]
    fn test_tags_with_all_is_rejected() {
        let config = config_from(&["--tags", "tag1,tag2", "--all"]);
        let err = assert_err!(config.validate());
        assert!(matches!(err, CheckError::Config(_)));
    }

    #[test]
    fn test_tags_without_all_is_accepted() {
        let config = config_from(&["--tags", "tag1,tag2"]);
        assert_ok!(config.validate());
        assert!(matches!(
            QueryMode::select(&config.target),
            QueryMode::ServiceWithTags { service: "consul", .. }
        ));
    }

    #[test]
    fn test_default_invocation_checks_consul_service() {
        let config = config_from(&[]);
        assert_ok!(config.validate());
        assert_eq!(QueryMode::select(&config.target), QueryMode::Service("consul"));
    }

    #[test]
    fn test_node_overrides_default_service() {
        let config = config_from(&["--node", "n1"]);
        assert_eq!(QueryMode::select(&config.target), QueryMode::Node("n1"));
    }

    #[test]
    fn test_all_overrides_default_service() {
        let config = config_from(&["-a"]);
        assert_eq!(QueryMode::select(&config.target), QueryMode::All);
    }

    #[test]
    fn test_unknown_flag_is_parse_error() {
        let result = CheckArgs::try_parse_from(["sensu-consul-check", "--bogus"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_help_is_not_an_error_stream() {
        let err = assert_err!(CheckArgs::try_parse_from(["sensu-consul-check", "--help"]));
        assert!(!err.use_stderr());
    }
}
