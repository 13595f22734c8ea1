/// Element ids, class tags and timing constants shared by the coordinator.
///
/// The hosting page's markup and stylesheet must agree with these names; the
/// coordinator only manages presence/absence of tags, never their visuals.
// Element ids looked up on demand
pub const BOX_ID: &str = "box";
pub const CIRCLE_ID: &str = "circle";
pub const MODAL_ID: &str = "modal";
pub const STATUS_ID: &str = "status";
pub const OUTPUT_ID: &str = "output";

// Class selectors and non-animation tags
pub const CARD_CLASS: &str = "card";
pub const MODAL_SHOW_CLASS: &str = "show";

// Timer registry labels
pub const COUNTER_TIMER: &str = "counter";

// Timing (milliseconds unless noted)
pub const COUNTER_PERIOD_MS: u64 = 1000;
pub const SHAKE_DURATION_MS: u64 = 500;
pub const FADE_STAGGER_SEC: f64 = 0.2; // per-card animation-delay step
pub const COLOR_TRANSITION: &str = "background-color 0.5s ease";

// Status palette: (background, foreground)
pub const STATUS_INFO_COLORS: (&str, &str) = ("#d1ecf1", "#0c5460");
pub const STATUS_SUCCESS_COLORS: (&str, &str) = ("#d4edda", "#155724");
pub const STATUS_ERROR_COLORS: (&str, &str) = ("#f8d7da", "#721c24");
pub const STATUS_PREFIX: &str = "Status: ";

// Demo inputs
pub const DEMO_RECT_WIDTH: f64 = 10.0;
pub const DEMO_RECT_HEIGHT: f64 = 5.0;
pub const DEMO_STRING: &str = "Hello World!";

// Random colors draw each digit from this alphabet
pub const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

// Console logging verbosity installed at start-up
pub const LOG_LEVEL: log::Level = log::Level::Info;
