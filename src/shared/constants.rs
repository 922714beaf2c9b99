/// Default page size for the item listing
pub const DEFAULT_PAGE_SIZE: i64 = 5;
