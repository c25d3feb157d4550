//! @ai:module:intent Chart generation for benchmark results
//! @ai:module:layer infrastructure
//! @ai:module:public_api ChartGenerator, ChartGeneratorTrait
//! @ai:module:stateless true

use crate::metrics::ResultsReport;
use anyhow::Result;
use plotters::prelude::*;
use std::path::Path;

/// @ai:intent Trait for chart generation
pub trait ChartGeneratorTrait: Send + Sync {
    /// @ai:intent Generate all charts from results
    fn generate_all(&self, report: &ResultsReport, output_dir: &Path) -> Result<Vec<String>>;
}

/// @ai:intent Generates SVG charts from benchmark results
pub struct ChartGenerator;

/// Horizontal units per target: a margin, a two-unit bar, a margin.
const SLOT: usize = 4;

/// @ai:intent One bar: target name, average, and the min..max whisker
#[derive(Debug, Clone, PartialEq)]
struct Bar {
    name: String,
    average: f64,
    min: f64,
    max: f64,
}

impl ChartGenerator {
    /// @ai:intent Create a new chart generator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Extract bars in report order
    /// @ai:effects pure
    fn bars(report: &ResultsReport) -> Vec<Bar> {
        report
            .iter()
            .map(|(name, s)| Bar {
                name: name.to_string(),
                average: s.average,
                min: s.min,
                max: s.max,
            })
            .collect()
    }

    /// @ai:intent Upper bound of the y axis with some headroom above the slowest max
    /// @ai:effects pure
    fn y_limit(bars: &[Bar]) -> f64 {
        let top = bars.iter().map(|b| b.max).fold(0.0, f64::max);

        if top > 0.0 {
            top * 1.15
        } else {
            1.0
        }
    }

    /// @ai:intent Generate average-time bar chart with min/max whiskers
    /// @ai:effects fs:write
    fn generate_average_chart(&self, report: &ResultsReport, output_path: &Path) -> Result<()> {
        let bars = Self::bars(report);
        let slots = (bars.len() * SLOT) as i32;
        let root = SVGBackend::new(output_path, (800, 500)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Average Execution Time", ("sans-serif", 25))
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(0..slots, 0f64..Self::y_limit(&bars))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(slots as usize + 1)
            .y_desc("Seconds")
            .x_label_formatter(&|x| Self::label_at(&bars, *x))
            .draw()?;

        chart.draw_series(bars.iter().enumerate().map(|(i, bar)| {
            let left = (i * SLOT) as i32 + 1;
            Rectangle::new([(left, 0.0), (left + 2, bar.average)], BLUE.mix(0.7).filled())
        }))?;

        chart.draw_series(bars.iter().enumerate().map(|(i, bar)| {
            let center = (i * SLOT) as i32 + 2;
            PathElement::new(
                vec![(center, bar.min), (center, bar.max)],
                BLACK.stroke_width(2),
            )
        }))?;

        root.present()?;
        Ok(())
    }

    /// @ai:intent Target name under the center of its slot, blank elsewhere
    /// @ai:effects pure
    fn label_at(bars: &[Bar], x: i32) -> String {
        if x < 0 || x as usize % SLOT != SLOT / 2 {
            return String::new();
        }

        bars.get(x as usize / SLOT)
            .map(|b| b.name.clone())
            .unwrap_or_default()
    }
}

impl Default for ChartGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartGeneratorTrait for ChartGenerator {
    /// @ai:intent Generate all charts
    /// @ai:effects fs:write
    fn generate_all(&self, report: &ResultsReport, output_dir: &Path) -> Result<Vec<String>> {
        std::fs::create_dir_all(output_dir)?;

        let mut generated = Vec::new();

        if report.is_empty() {
            tracing::warn!("No results to chart");
            return Ok(generated);
        }

        let averages_path = output_dir.join("averages.svg");
        self.generate_average_chart(report, &averages_path)?;
        generated.push("averages.svg".to_string());

        Ok(generated)
    }
}
