//! Word lists
//!
//! The built-in vocabulary plus loading of a user word file. Every word is
//! validated to be non-empty uppercase A-Z; duplicates are kept and weigh
//! selection accordingly.

use std::fs;
use std::path::Path;

use rand::Rng;
use tracing::debug;

use crate::{HangmanError, Result};

/// Built-in vocabulary used when no word file is configured
pub const DEFAULT_WORDS: &[&str] = &[
    "TEA", "GUN", "BOW", "AXE", "OAK", "MAP", "TAP", "NAP", "ZOO", "ZIP", "WAX", "YAK", "JOY",
    "FLY", "TRY", "CRY", "DRY", "BUY", "FUN", "RUN", "SAD", "BAD", "MAD", "GLAD", "HOT", "NOT",
    "LOT", "DOT", "POT", "ROT", "SIT", "BIT", "FIT", "HIT", "LIT", "PIT", "WIT", "KIT", "CUT",
    "BUT", "NUT", "OUT", "PUT", "RAT", "SAT", "EAT", "MAT", "PAT", "VAT", "WET", "WALK", "RUN",
    "JUMP", "DANCE", "SWIM", "DRIVE", "RIDE", "FLY", "COOK", "BAKE", "WASH", "CLEAN", "FIX",
    "BUILD", "PAINT", "DRAW", "WRITE", "READ", "STUDY", "LEARN", "TEACH", "HELP", "GIVE",
    "TAKE", "BUY", "SELL", "PAY", "COST", "SAVE", "LOSE", "FIND", "LOOK", "SEE", "HEAR",
    "FEEL", "SMELL", "TASTE", "TOUCH", "HOLD", "DROP", "PUSH", "PULL", "LIFT", "CARRY",
    "THROW", "CATCH", "KICK", "HIT", "FIGHT", "PEACE", "LOVE", "LIKE", "HATE", "FEAR", "HOPE",
    "WISH", "DREAM", "PLAN", "GOAL", "TASK", "JOB", "WORK", "PLAY", "REST", "SLEEP", "WAKE",
    "EAT", "DRINK", "CHEW", "SWALLOW", "TALK", "SAY", "TELL", "ASK", "ANSWER", "CALL", "NAME",
    "WORD", "TEXT", "LETTER", "PHONE", "EMAIL", "VIDEO", "AUDIO", "IMAGE", "PHOTO", "MOVIE",
    "MUSIC", "SONG", "DANCE", "SPORT", "GAME", "CHESS", "CARDS", "BOARD", "PIANO", "GUITAR",
    "DRUMS", "VIOLIN", "FLUTE", "PAINT", "BRUSH", "COLOR", "WHITE", "BLACK", "GREEN", "BLUE",
    "RED", "YELLOW", "PURPLE", "BROWN", "GRAY", "PINK", "ORANGE", "BEIGE", "TURQUOISE",
    "SILVER", "GOLD", "BRONZE", "COPPER", "HOUSE", "HOME", "ROOF", "FLOOR", "WALL", "DOOR",
    "WINDOW", "TABLE", "CHAIR", "SOFA", "BED", "PILLOW", "BLANKET", "SHEET", "TOWEL", "SHOWER",
    "BATH", "SINK", "TOILET", "MIRROR", "KITCHEN", "FRIDGE", "STOVE", "OVEN", "MICROWAVE",
    "TOASTER", "BLENDER", "MIXER", "DISH", "SPOON", "FRIEND", "FAMILY", "PARENT", "MOTHER",
    "FATHER", "SISTER", "BROTHER", "COUSIN", "AUNT", "UNCLE", "DOCTOR", "NURSE", "TEACHER",
    "STUDENT", "LAWYER", "JUDGE", "POLICE", "SOLDIER", "FARMER", "WORKER", "ENGINE", "MOTOR",
    "BATTERY", "WIRING", "CIRCUIT", "SWITCH", "BUTTON", "LEVER", "GEAR", "WHEEL", "STREET",
    "ROAD", "AVENUE", "HIGHWAY", "BRIDGE", "TUNNEL", "SIDEWALK", "CURB", "GUTTER", "DRAIN",
    "FOREST", "JUNGLE", "DESERT", "VALLEY", "CANYON", "PLATEAU", "GLACIER", "VOLCANO",
    "CRATER", "CAVE", "WEATHER", "CLIMATE", "TEMPERATURE", "HUMIDITY", "PRESSURE", "FORECAST",
    "SUNNY", "CLOUDY", "RAINY", "STORMY", "WINDY", "FOGGY", "SNOWY", "ICY", "HOT", "WARM",
    "COOL", "COLD", "FREEZING", "BOILING", "ANIMALS", "MAMMALS", "REPTILES", "AMPHIBIANS",
    "INSECTS", "BIRDS", "FISH", "WHALE", "SHARK", "DOLPHIN", "OCTOPUS", "LOBSTER", "CRAB",
    "SHRIMP", "SCORPION", "SPIDER", "BEETLE", "BUTTERFLY", "DRAGONFLY", "LADYBUG", "VEGETABLE",
    "FRUIT", "CEREAL", "GRAIN", "WHEAT", "RICE", "CORN", "BARLEY", "OATS", "RYE", "TELEVISION",
    "RADIO", "NEWSPAPER", "MAGAZINE", "BOOK", "NOVEL", "POETRY", "ESSAY", "ARTICLE", "REPORT",
    "COMPUTER", "LAPTOP", "TABLET", "SMARTPHONE", "PRINTER", "SCANNER", "KEYBOARD", "MOUSE",
    "MONITOR", "SPEAKERS", "SOFTWARE", "HARDWARE", "OPERATING", "APPLICATION", "PROGRAM",
    "ALGORITHM", "FUNCTION", "VARIABLE", "CONSTANT", "PARAMETER", "INTERNET", "WEBSITE",
    "WEBPAGE", "BROWSER", "SEARCH", "ENGINE", "EMAIL", "MESSAGE", "CHAT", "FORUM", "SOCIAL",
    "NETWORK", "PROFILE", "ACCOUNT", "PASSWORD", "USERNAME", "SECURITY", "PRIVACY", "SETTING",
    "OPTION", "EDUCATION", "SCHOOL", "COLLEGE", "UNIVERSITY", "COURSE", "LESSON", "HOMEWORK",
    "EXAM", "TEST", "GRADE", "MEDICAL", "HOSPITAL", "CLINIC", "DOCTOR", "NURSE", "PATIENT",
    "MEDICINE", "TREATMENT", "SURGERY", "RECOVERY", "TRANSPORT", "VEHICLE", "AUTOMOBILE",
    "MOTORCYCLE", "BICYCLE", "AIRPLANE", "HELICOPTER", "TRAIN", "BUS", "TAXI", "BUILDING",
    "STRUCTURE", "FOUNDATION", "ROOFING", "WINDOWS", "DOORS", "FLOORING", "PAINTING",
    "PLUMBING", "ELECTRICAL", "ECONOMY", "FINANCE", "BUSINESS", "COMPANY", "CORPORATION",
    "INDUSTRY", "MARKET", "STOCK", "TRADE", "INVESTMENT", "RUN", "WALK", "TALK", "SING",
    "DANCE", "JUMP", "SWIM", "FLY", "DRIVE", "BUILD", "CREATE", "DESIGN", "PLAN", "ORGANIZE",
    "MANAGE", "LEAD", "FOLLOW", "LISTEN", "SPEAK", "BIG", "SMALL", "TALL", "SHORT", "FAST",
    "SLOW", "HOT", "COLD", "WARM", "COOL", "SOFT", "HARD", "ROUGH", "SMOOTH", "BRIGHT", "DARK",
    "LIGHT", "HEAVY", "LIGHT", "DOCTOR", "NURSE", "TEACHER", "LAWYER", "ENGINEER", "SCIENTIST",
    "ARTIST", "MUSICIAN", "ACTOR", "WRITER", "CHEF", "BAKER", "FARMER", "DRIVER", "PILOT",
    "SAILOR", "SOLDIER", "EMAIL", "SERVER", "CLIENT", "NETWORK", "ROUTER", "MODEM", "WEBCAM",
    "HEADPHONES", "KEYBOARD", "MOUSE", "MONITOR", "PRINTER", "SCANNER", "SPEAKERS",
    "MICROPHONE", "PIZZA", "BURGER", "SALAD", "SANDWICH", "SOUP", "STEW", "ROAST", "GRILL",
    "FRY", "BAKE", "BOIL", "STEAM", "TOAST", "BLEND", "MIX", "CHOP", "SLICE", "DICE", "GRATE",
];

/// Immutable, non-empty list of candidate secret words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Build a word list, rejecting an empty list or any word outside A-Z
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();

        if words.is_empty() {
            return Err(HangmanError::WordListError(
                "Word list must contain at least one word".to_string(),
            ));
        }

        for (index, word) in words.iter().enumerate() {
            if word.is_empty() {
                return Err(HangmanError::WordListError(format!(
                    "Word {} is empty",
                    index + 1
                )));
            }
            if !word.bytes().all(|b| b.is_ascii_uppercase()) {
                return Err(HangmanError::WordListError(format!(
                    "Word {} ({:?}) contains characters outside A-Z",
                    index + 1,
                    word
                )));
            }
        }

        Ok(Self { words })
    }

    /// The built-in vocabulary
    pub fn builtin() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Load a word file: a JSON array for `.json` files, otherwise one word per line
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            HangmanError::WordListError(format!(
                "Failed to read word file {}: {}",
                path.display(),
                e
            ))
        })?;

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let list = if is_json {
            let words: Vec<String> = serde_json::from_str(&content)?;
            Self::new(words.iter().map(|w| normalize(w)))?
        } else {
            Self::parse_text(&content)?
        };

        debug!(path = %path.display(), words = list.len(), "Loaded word file");
        Ok(list)
    }

    /// Parse plain text with one word per line; blank lines and `#` comments are skipped
    pub fn parse_text(content: &str) -> Result<Self> {
        Self::new(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(normalize),
        )
    }

    /// Pick a word uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.words[rng.gen_range(0..self.words.len())]
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Never true for a constructed list
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self::builtin()
    }
}

fn normalize(word: &str) -> String {
    word.trim().to_ascii_uppercase()
}
