use std::time::Duration;

pub const LOG_FILE_PATH: &str = "/tmp/chatkit.log";

/// Base URL the task list fetcher targets when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

pub const DEFAULT_FETCH_TIMEOUT_SECS: usize = 30;

/// Max rows the input box may grow to before it stops resizing.
pub const MAX_INPUT_ROWS: u16 = 6;

/// Terminal widths below this render the compact (single task) layout.
pub const COMPACT_WIDTH: u16 = 80;

/// Width of the task panel column in the wide layout.
pub const TASK_PANEL_WIDTH: u16 = 40;

/// Cap on the task list region height in the wide layout.
pub const TASK_PANEL_MAX_ROWS: u16 = 20;

/// How long a button must stay focused before its tooltip shows.
pub const TOOLTIP_DELAY: Duration = Duration::from_millis(100);

pub const FRAME_DURATION: Duration = Duration::from_millis(100);
