use plotlars::{Line, Plot, Rgb, Shape, Text, TimeSeriesPlot};
use polars::prelude::*;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("Stored table is missing a required column")]
    Column(#[from] PolarsError),

    #[error("Stored table has no rows to plot")]
    EmptyTable,
}

/// Draw the stored table as a temperature-over-time line chart.
///
/// The title comes from row zero's place and date; a table with mixed places
/// or dates is not prevented and the title silently reflects row zero. The
/// figure is handed to the viewer, which the user dismisses.
pub fn render(table: &DataFrame) -> Result<(), PlotError> {
    let (place, date) = chart_labels(table)?;
    let title = format!("{place} {date}");
    info!("Rendering temperature chart '{title}'");

    TimeSeriesPlot::builder()
        .data(table)
        .x("time")
        .y("temp_c")
        .size(8)
        .colors(vec![Rgb(0, 128, 0)])
        .lines(vec![Line::Solid])
        .with_shape(true)
        .shapes(vec![Shape::Circle])
        .plot_title(Text::from(title.as_str()))
        .x_title("Time [h]")
        .y_title("temperature [C]")
        .build()
        .plot();

    Ok(())
}

/// Title parts for the chart: place and date of row zero.
fn chart_labels(table: &DataFrame) -> Result<(String, String), PlotError> {
    Ok((
        first_value(table, "place")?,
        first_value(table, "date")?,
    ))
}

fn first_value(table: &DataFrame, column: &str) -> Result<String, PlotError> {
    table
        .column(column)?
        .str()?
        .get(0)
        .map(str::to_owned)
        .ok_or(PlotError::EmptyTable)
}
