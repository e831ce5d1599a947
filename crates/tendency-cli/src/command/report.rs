use std::path::PathBuf;

use tendency_analysis::{
    engine::StatisticsEngine,
    report::{self, ReportFormatter},
};

use crate::{command::DatasetSourceArg, util::Output};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum ReportFormat {
    /// Plain-text report
    #[default]
    Text,
    /// Array of per-column statistics as JSON
    Json,
}

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ReportArg {
    #[clap(flatten)]
    pub(super) source: DatasetSourceArg,

    /// Output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub(super) format: ReportFormat,

    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ReportArg) -> anyhow::Result<()> {
    let ReportArg {
        source,
        format,
        output,
    } = arg;

    let dataset = source.load()?;
    let result = StatisticsEngine::new().compute(&dataset)?;
    tracing::info!(columns = result.len(), "computed statistics");

    // The output is only opened once the result is known to be printable
    match format {
        ReportFormat::Text => {
            let text = ReportFormatter::new().render(&result)?;
            let mut output = Output::from_output_path(output.clone())?;
            output.write_text(&text)?;
            tracing::info!(output = %output.display_path(), "report written");
        }
        ReportFormat::Json => {
            report::ensure_finite(&result)?;
            let mut output = Output::from_output_path(output.clone())?;
            output.write_json(&result)?;
            tracing::info!(output = %output.display_path(), "report written");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use tendency_analysis::report::NonFiniteValueError;

    use super::*;

    fn report_arg(input: &Path, format: ReportFormat, output: &Path) -> ReportArg {
        ReportArg {
            source: DatasetSourceArg {
                input: Some(input.to_owned()),
                ..DatasetSourceArg::default()
            },
            format,
            output: Some(output.to_owned()),
        }
    }

    #[test]
    fn test_text_report_from_csv() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("data.csv");
        let output = dir.path().join("report.txt");
        fs::write(&input, "A,B\n1,4\n2,4\n3,5\n").unwrap();

        run(&report_arg(&input, ReportFormat::Text, &output)).unwrap();

        let report = fs::read_to_string(&output).unwrap();
        assert!(report.starts_with("REPORT ANALISI STATISTICA\n"));
        assert!(report.contains(
            "Variabile: A\n  Media:   2.00\n  Mediana: 2.00\n  Moda:    1.00\n"
        ));
        assert!(report.contains(
            "Variabile: B\n  Media:   4.33\n  Mediana: 4.00\n  Moda:    4.00\n"
        ));
    }

    #[test]
    fn test_json_report_from_json_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("data.json");
        let output = dir.path().join("report.json");
        let dataset = r#"{
            "seed": 1,
            "columns": [
                { "name": "z", "values": [1.0, 2.0, 3.0] },
                { "name": "a", "values": [2.0, 2.0] }
            ]
        }"#;
        fs::write(&input, dataset).unwrap();

        run(&report_arg(&input, ReportFormat::Json, &output)).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "name": "z", "mean": 2.0, "median": 2.0, "mode": 1.0 },
                { "name": "a", "mean": 2.0, "median": 2.0, "mode": 2.0 },
            ])
        );
    }

    #[test]
    fn test_non_finite_result_keeps_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("data.csv");
        fs::write(&input, "A\n1\nNaN\n").unwrap();

        for format in [ReportFormat::Text, ReportFormat::Json] {
            let output = dir.path().join("report.out");
            fs::write(&output, "previous report\n").unwrap();

            let err = run(&report_arg(&input, format, &output)).unwrap_err();
            let err = err.downcast_ref::<NonFiniteValueError>().unwrap();
            assert_eq!(err.column, "A");
            assert_eq!(err.statistic, tendency_analysis::engine::Statistic::Mean);
            assert_eq!(fs::read_to_string(&output).unwrap(), "previous report\n");
        }
    }

    #[test]
    fn test_empty_column_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("data.csv");
        let output = dir.path().join("report.txt");
        fs::write(&input, "A,B\n").unwrap();

        let err = run(&report_arg(&input, ReportFormat::Text, &output)).unwrap_err();
        assert_eq!(err.to_string(), "Column 'A' is empty");
        assert!(!output.exists());
    }
}
