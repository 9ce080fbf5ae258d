//! JSON form of [`GameConfig`] on disk: read by `play --config`, written by
//! `dump-config`.

use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::Path,
};

use anyhow::Context as _;
use blockfall_engine::GameConfig;

/// Reads a config file. Missing fields take their default value.
pub(crate) fn load(path: &Path) -> anyhow::Result<GameConfig> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open config file: {}", path.display()))?;
    parse(BufReader::new(file))
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Writes `config` as pretty JSON to `output`, or to stdout when `None`.
pub(crate) fn save(config: &GameConfig, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create config file: {}", path.display()))?;
            write(config, BufWriter::new(file))
                .with_context(|| format!("Failed to write config to {}", path.display()))
        }
        None => write(config, io::stdout().lock()).context("Failed to write config to stdout"),
    }
}

fn parse<R>(reader: R) -> anyhow::Result<GameConfig>
where
    R: Read,
{
    Ok(serde_json::from_reader(reader)?)
}

fn write<W>(config: &GameConfig, mut writer: W) -> anyhow::Result<()>
where
    W: Write,
{
    serde_json::to_writer_pretty(&mut writer, config)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_written_config_reads_back() {
        let config = GameConfig {
            board_width: 12,
            tick_interval: Duration::from_millis(250),
            ..GameConfig::default()
        };
        let mut buf = Vec::new();
        write(&config, &mut buf).unwrap();

        let text = String::from_utf8(buf.clone()).unwrap();
        assert!(text.contains("\"tick_interval_ms\": 250"));
        assert!(text.ends_with("}\n"));
        assert_eq!(parse(buf.as_slice()).unwrap(), config);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = parse(r#"{"board_height": 16}"#.as_bytes()).unwrap();
        assert_eq!(config.board_height, 16);
        assert_eq!(config.board_width, 10);
        assert_eq!(config.points_per_line, 10);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(parse(r#"{"levels": 3}"#.as_bytes()).is_err());
    }

    #[test]
    fn test_missing_file_names_path() {
        let path = Path::new("no/such/dir/blockfall.json");
        let error = load(path).unwrap_err();
        assert!(error.to_string().contains("no/such/dir/blockfall.json"));
    }
}
