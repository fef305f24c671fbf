//! Reusable RSX components for viz chart apps.

mod calendar;
mod container;
mod legend;
mod tooltip;

pub use calendar::Calendar;
pub use container::{use_chart, ChartContainer, ChartContext};
pub use legend::{ChartLegendContent, VerticalAlign};
pub use tooltip::{
    ChartTooltipContent, Indicator, LabelFormatterArgs, TooltipFormatterArgs,
};
