pub const ADJACENCY_MS: i64 = 1000;
pub const CARD_WINDOW_TICKS: usize = 15;
pub const DRAW_WINDOW_MS: i64 = 45_000;
pub const API_URL: &str = "https://www.fflogs.com/v1";
pub const UNKNOWN_JOB: &str = "N/A";
pub const FIGHTS_CACHE_CAPACITY: u64 = 16;

pub const BALANCE_DRAWN_ID: u32 = 1000913;
pub const BOLE_DRAWN_ID: u32 = 1000914;
pub const ARROW_DRAWN_ID: u32 = 1000915;
pub const SPEAR_DRAWN_ID: u32 = 1000916;
pub const EWER_DRAWN_ID: u32 = 1000917;
pub const SPIRE_DRAWN_ID: u32 = 1000918;

pub const CARD_DRAWN_IDS: [u32; 6] = [
    BALANCE_DRAWN_ID,
    BOLE_DRAWN_ID,
    ARROW_DRAWN_ID,
    SPEAR_DRAWN_ID,
    EWER_DRAWN_ID,
    SPIRE_DRAWN_ID,
];
