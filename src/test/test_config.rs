
#[cfg(test)]
mod test {
    use std::io::Write;
    use std::path::PathBuf;

    use crate::config::{ConfigError, GameConfig, DEFAULT_LOG_FILE};

    #[test]
    fn no_args_gives_defaults(){
        let config = GameConfig::from_args(Vec::<String>::new()).unwrap();

        assert_eq!(GameConfig::default(), config);
        assert!(config.lock_after_win);
        assert_eq!(PathBuf::from(DEFAULT_LOG_FILE), config.log_file);
    }

    #[test]
    fn partial_json_keeps_defaults(){
        let config = GameConfig::from_json(r#"{ "pad_ragged_rows": true, "log_level": "debug" }"#).unwrap();

        assert!(config.pad_ragged_rows);
        assert_eq!("debug", config.log_level);
        assert!(config.lock_after_win);
        assert_eq!(None, config.level_path);
    }

    #[test]
    fn flags_override_defaults(){
        let config = GameConfig::from_args([
            "levels/warehouse.txt",
            "--pad-ragged",
            "--closed",
            "--no-lock",
            "--log-file",
            "out.log",
            "--log-level",
            "trace",
        ])
        .unwrap();

        assert_eq!(Some(PathBuf::from("levels/warehouse.txt")), config.level_path);
        assert!(config.pad_ragged_rows);
        assert!(config.require_closed_perimeter);
        assert!(!config.lock_after_win);
        assert_eq!(PathBuf::from("out.log"), config.log_file);
        assert_eq!("trace", config.log_level);

        let options = config.engine_options();
        assert!(options.load.pad_ragged_rows);
        assert!(options.load.require_closed_perimeter);
        assert!(!options.lock_after_win);
    }

    #[test]
    fn config_file_is_read_then_overridden(){
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "level_path": "a.txt", "lock_after_win": false, "pad_ragged_rows": true }}"#).unwrap();
        let path = file.path().to_string_lossy().to_string();

        let config = GameConfig::from_args(["b.txt".to_string(), "--config".to_string(), path]).unwrap();

        assert_eq!(Some(PathBuf::from("b.txt")), config.level_path);
        assert!(!config.lock_after_win);
        assert!(config.pad_ragged_rows);
    }

    #[test]
    fn config_flag_consumed_as_value_is_not_read(){
        let config = GameConfig::from_args(["--log-file", "--config", "levels/corridor.txt"]).unwrap();

        assert_eq!(PathBuf::from("--config"), config.log_file);
        assert_eq!(Some(PathBuf::from("levels/corridor.txt")), config.level_path);
        assert!(config.lock_after_win);
    }

    #[test]
    fn bad_config_file_reports_parse_error(){
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = GameConfig::from_file(file.path()).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn unknown_flag_fails(){
        let err = GameConfig::from_args(["--fast"]).unwrap_err();

        assert!(matches!(err, ConfigError::UnknownArgument(ref flag) if flag == "--fast"));
    }

    #[test]
    fn flag_without_value_fails(){
        assert!(matches!(
            GameConfig::from_args(["--log-file"]),
            Err(ConfigError::MissingValue(_))
        ));
        assert!(matches!(
            GameConfig::from_args(["--config"]),
            Err(ConfigError::MissingValue(_))
        ));
    }
}
