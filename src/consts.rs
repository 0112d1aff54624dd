/// Column headers of the published trip files
pub(crate) const COL_START_TIME: &str = "Start Time";
pub(crate) const COL_END_TIME: &str = "End Time";
pub(crate) const COL_TRIP_DURATION: &str = "Trip Duration";
pub(crate) const COL_START_STATION: &str = "Start Station";
pub(crate) const COL_END_STATION: &str = "End Station";
pub(crate) const COL_USER_TYPE: &str = "User Type";
pub(crate) const COL_GENDER: &str = "Gender";
pub(crate) const COL_BIRTH_YEAR: &str = "Birth Year";

/// Naive timestamp layouts accepted for start/end times, tried in order
pub(crate) const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Display format for timestamps: "2017-01-01 00:07:57"
pub(crate) const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Default directory holding the city CSV files
pub(crate) const DEFAULT_DATA_DIR: &str = "data";

/// Environment override for the data directory
pub(crate) const DATA_DIR_ENV: &str = "BIKESTATS_DATA_DIR";

/// Rows shown per page by the raw viewer
pub(crate) const DEFAULT_PAGE_SIZE: usize = 5;
