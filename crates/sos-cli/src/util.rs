use std::{
    fs::File,
    io::{self, BufWriter, Read as _, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use sos_display::config::DisplayConfig;
use sos_stats::sample;

#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn save_json<T>(value: &T, output_path: Option<PathBuf>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = Output::from_output_path(output_path)?;
        output.write_json(value)
    }

    pub fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) => Output::open(path),
            None => Ok(Output::stdout()),
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    pub fn write_json<T>(&mut self, value: T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        self.write_with("write JSON", |out| {
            serde_json::to_writer_pretty(&mut *out, &value)?;
            writeln!(out)?;
            Ok(())
        })
    }

    pub fn write_lines<I, S>(&mut self, lines: I) -> anyhow::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.write_with("write lines", |out| {
            for line in lines {
                writeln!(out, "{}", line.as_ref())?;
            }
            Ok(())
        })
    }

    /// Runs `write` and flushes, naming the destination in any error.
    fn write_with<F>(&mut self, action: &str, write: F) -> anyhow::Result<()>
    where
        F: FnOnce(&mut Self) -> anyhow::Result<()>,
    {
        write(self)
            .and_then(|()| Ok(self.flush()?))
            .with_context(|| format!("Failed to {action} to {}", self.display_path()))
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {file_kind} file: {}", path.display()))?;
    serde_json::from_reader(io::BufReader::new(file))
        .with_context(|| format!("Failed to parse {file_kind} JSON file: {}", path.display()))
}

/// Loads the display settings, or the defaults when no file is given.
pub fn read_display_config(path: Option<&Path>) -> anyhow::Result<DisplayConfig> {
    match path {
        Some(path) => read_json_file("display config", path),
        None => Ok(DisplayConfig::default()),
    }
}

/// Reads a whole input file, or stdin when `path` is `None` or `-`.
pub fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    let mut text = String::new();
    match path {
        Some(path) if path != Path::new("-") => {
            File::open(path)
                .and_then(|mut file| file.read_to_string(&mut text))
                .with_context(|| format!("Failed to read input file: {}", path.display()))?;
        }
        _ => {
            io::stdin()
                .lock()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
        }
    }
    Ok(text)
}

/// Splits text into rows of fields.
///
/// Fields are separated by commas and/or whitespace. Blank lines and lines
/// starting with `#` are skipped.
pub fn parse_table(text: &str) -> Vec<Vec<&str>> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            line.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|field| !field.is_empty())
                .collect()
        })
        .collect()
}

/// Takes the values of one column.
///
/// In permissive mode every field goes through [`sample::coerce_value`] and
/// short rows yield `NaN`. In strict mode a short row or a non-numeric field
/// is an error.
pub fn column_sample(rows: &[Vec<&str>], column: usize, strict: bool) -> anyhow::Result<Vec<f64>> {
    if !strict {
        let numeric = rows
            .iter()
            .map(|row| row.iter().map(|field| sample::coerce_value(field)).collect())
            .collect::<Vec<Vec<f64>>>();
        return Ok(sample::extract_column(&numeric, column));
    }

    let fields = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            row.get(column)
                .copied()
                .with_context(|| format!("Row {i} has no column {column}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    let values = sample::parse_sample(fields)
        .with_context(|| format!("Column {column} is not numeric"))?;
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
# time, value
0, 1.5
1 2.5

2,\tn/a
3
";

    #[test]
    fn test_parse_table() {
        let rows = parse_table(TABLE);
        assert_eq!(
            rows,
            vec![
                vec!["0", "1.5"],
                vec!["1", "2.5"],
                vec!["2", "n/a"],
                vec!["3"]
            ]
        );
    }

    #[test]
    fn test_column_sample_permissive() {
        let rows = parse_table(TABLE);
        let values = column_sample(&rows, 1, false).unwrap();
        assert_eq!(&values[..2], &[1.5, 2.5]);
        assert!(values[2].is_nan());
        assert!(values[3].is_nan());
        assert_eq!(column_sample(&rows, 0, false).unwrap(), vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_column_sample_strict() {
        let rows = parse_table(TABLE);
        assert_eq!(column_sample(&rows, 0, true).unwrap(), vec![0.0, 1.0, 2.0, 3.0]);
        assert!(column_sample(&rows, 1, true).is_err());
        assert!(column_sample(&rows[..2], 1, true).is_ok());
        assert!(column_sample(&rows[2..], 1, true).is_err());
    }

    #[test]
    fn test_output_file_round_trip() {
        let path = std::env::temp_dir().join(format!("sos-utils-{}.json", std::process::id()));
        let config = DisplayConfig::default();
        Output::save_json(&config, Some(path.clone())).unwrap();
        let back: DisplayConfig = read_json_file("display config", &path).unwrap();
        assert_eq!(back, config);

        let mut output = Output::open(path.clone()).unwrap();
        output.write_lines(["Cel\t°C", "K\tK"]).unwrap();
        drop(output);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Cel\t°C\nK\tK\n");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_config_file_names_the_path() {
        let err = read_display_config(Some(Path::new("/nonexistent/display.json"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/display.json"));
    }

    #[test]
    fn test_default_display_config() {
        let config = read_display_config(None).unwrap();
        assert_eq!(config, DisplayConfig::default());
    }
}
