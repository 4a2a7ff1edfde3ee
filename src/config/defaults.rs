use super::constants::*;

pub(crate) fn log_level() -> Option<String> {
    Some("info".to_string())
}

pub(crate) fn log_file_path() -> String {
    LOG_FILE_PATH.to_string()
}

pub(crate) fn base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

pub(crate) fn fetch_timeout_secs() -> Option<usize> {
    Some(DEFAULT_FETCH_TIMEOUT_SECS)
}

pub(crate) fn max_input_rows() -> u16 {
    MAX_INPUT_ROWS
}

pub(crate) fn compact_width() -> u16 {
    COMPACT_WIDTH
}
