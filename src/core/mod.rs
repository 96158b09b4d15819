pub mod bar_series;
pub mod samples;
pub mod scale;
pub mod stem_series;
pub mod ticks;
pub mod time_scale;
pub mod types;
pub mod value_scale;

pub use bar_series::{BarGeometry, bar_slot_width, project_bars};
pub use samples::{NormalizedSeries, Sample, normalize_samples, normalize_stepped};
pub use scale::LinearScale;
pub use stem_series::{StemGeometry, project_stems};
pub use ticks::{
    MAX_TICKS, TimeTickInterval, linear_ticks, nice_tick_step, select_time_interval, time_ticks,
    time_ticks_with_interval,
};
pub use time_scale::TimeScale;
pub use types::{DataPoint, Domain, Margins, PlotArea, Viewport};
pub use value_scale::ValueScale;
