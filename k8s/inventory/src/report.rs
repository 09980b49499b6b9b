use crate::{
    constants::MISSING_CELL,
    error::{Result, SerializeJson, SerializeYaml, WriteReport},
    health::Health,
    inventory::Inventory,
};
use serde::Serialize;
use snafu::ResultExt;
use std::io::Write;

/// The formats a report can be written in.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Column aligned table.
    #[default]
    Table,
    Json,
    Yaml,
}

const HEADERS: [&str; 6] = [
    "NAMESPACE",
    "RELEASE",
    "CHART",
    "VERSION",
    "REPOSITORY",
    "STATUS",
];

/// One line of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub namespace: String,
    pub release: String,
    pub chart: Option<String>,
    pub version: Option<String>,
    pub repository: Option<String>,
    pub phase: Option<String>,
    pub health: Health,
}

impl ReportRow {
    fn cells(&self) -> [String; 6] {
        let cell = |value: &Option<String>| match value {
            Some(value) if !value.is_empty() => value.clone(),
            _ => MISSING_CELL.to_string(),
        };
        [
            self.namespace.clone(),
            self.release.clone(),
            cell(&self.chart),
            cell(&self.version),
            cell(&self.repository),
            self.health.to_string(),
        ]
    }
}

/// Flattened view of an inventory. Namespaces without releases contribute no rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Report {
    rows: Vec<ReportRow>,
}

impl From<&Inventory> for Report {
    fn from(inventory: &Inventory) -> Self {
        let rows = inventory
            .namespaces()
            .iter()
            .flat_map(|namespace| {
                namespace.releases().iter().map(|release| {
                    let chart = release.chart();
                    ReportRow {
                        namespace: namespace.name().to_string(),
                        release: release.name().to_string(),
                        chart: chart.map(|chart| chart.name().to_string()),
                        version: chart.map(|chart| chart.version().to_string()),
                        repository: chart.map(|chart| chart.repository().to_string()),
                        phase: chart.map(|chart| chart.phase().to_string()),
                        health: release.health(),
                    }
                })
            })
            .collect();
        Self { rows }
    }
}

impl Report {
    /// Check if there is nothing to report.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write the report in the requested format.
    /// An empty report is written as a single notice line rather than an empty table.
    pub fn write<W: Write>(&self, format: OutputFormat, writer: &mut W) -> Result<()> {
        match format {
            OutputFormat::Table if self.is_empty() => {
                writeln!(writer, "No HelmReleases found").context(WriteReport)
            }
            OutputFormat::Table => self.write_table(writer).context(WriteReport),
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *writer, self).context(SerializeJson)?;
                writeln!(writer).context(WriteReport)
            }
            OutputFormat::Yaml => serde_yaml::to_writer(writer, self).context(SerializeYaml),
        }
    }

    fn write_table<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let rows: Vec<[String; 6]> = self.rows.iter().map(ReportRow::cells).collect();

        let mut widths = HEADERS.map(|header| header.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let separator = widths.map(|width| "-".repeat(width));
        write_line(writer, &HEADERS[..], &widths)?;
        write_line(writer, &separator[..], &widths)?;
        for row in &rows {
            write_line(writer, &row[..], &widths)?;
        }
        Ok(())
    }
}

fn write_line<W: Write, S: AsRef<str>>(
    writer: &mut W,
    cells: &[S],
    widths: &[usize],
) -> std::io::Result<()> {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let cell = cell.as_ref();
            let padding = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(padding))
        })
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(writer, "{}", line.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        inventory::{InventoryBuilder, NamespaceSelector},
        resources::{ReleaseDocument, ResourceClient},
    };
    use async_trait::async_trait;
    use serde_json::json;

    struct OneNamespace(Vec<ReleaseDocument>);

    #[async_trait]
    impl ResourceClient for OneNamespace {
        async fn list_namespaces(&self) -> Result<Vec<String>> {
            Ok(vec!["prod".to_string()])
        }

        async fn list_releases(&self, _namespace: &str) -> Result<Vec<ReleaseDocument>> {
            Ok(self.0.clone())
        }
    }

    async fn report(documents: Vec<ReleaseDocument>) -> Report {
        let client = OneNamespace(documents);
        let inventory = InventoryBuilder::new(&client)
            .build(&NamespaceSelector::All)
            .await
            .unwrap();
        Report::from(&inventory)
    }

    fn render(report: &Report, format: OutputFormat) -> String {
        let mut out = Vec::new();
        report.write(format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn table_is_column_aligned() {
        let report = report(vec![
            ReleaseDocument::new(
                "redis",
                json!({
                    "spec": {"chart": {"name": "redis", "version": "1.2.3", "repository": "https://charts"}},
                    "status": {"phase": "Succeeded"}
                }),
            ),
            ReleaseDocument::new("broken", json!({"spec": {"chart": {"name": "broken"}}})),
        ])
        .await;

        let table = render(&report, OutputFormat::Table);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(
            lines,
            [
                "NAMESPACE  RELEASE  CHART  VERSION  REPOSITORY      STATUS",
                "---------  -------  -----  -------  --------------  ------",
                "prod       redis    redis  1.2.3    https://charts  \u{2705}",
                "prod       broken   -      -        -               \u{274C}",
            ]
        );
    }

    #[tokio::test]
    async fn empty_table_is_a_notice() {
        let report = report(vec![]).await;
        assert!(report.is_empty());
        assert_eq!(
            render(&report, OutputFormat::Table),
            "No HelmReleases found\n"
        );
    }

    #[tokio::test]
    async fn json_carries_health_and_absent_chart() {
        let report = report(vec![ReleaseDocument::new("broken", json!({}))]).await;

        let value: serde_json::Value =
            serde_json::from_str(&render(&report, OutputFormat::Json)).unwrap();
        assert_eq!(
            value,
            json!([{
                "namespace": "prod",
                "release": "broken",
                "chart": null,
                "version": null,
                "repository": null,
                "phase": null,
                "health": "Unhealthy"
            }])
        );
    }

    #[tokio::test]
    async fn yaml_lists_rows() {
        let report = report(vec![ReleaseDocument::new(
            "redis",
            json!({"spec": {"chart": {"version": "1.2.3"}}, "status": {"phase": "Succeeded"}}),
        )])
        .await;

        let rows: Vec<serde_json::Value> =
            serde_yaml::from_str(&render(&report, OutputFormat::Yaml)).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["version"], "1.2.3");
        assert_eq!(rows[0]["chart"], "");
        assert_eq!(rows[0]["health"], "Healthy");
    }
}
