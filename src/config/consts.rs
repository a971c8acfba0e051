// src/config/consts.rs

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "candidates";

// Wiki
pub const DEFAULT_WIKI_DIR: &str = "out/wiki";
pub const DRAFT_PREFIX: &str = "Draft:";
pub const LIST_PAGE: &str = "CandidatebotListOfPages";
pub const EDIT_SUMMARY: &str = "candidatebot did this";

// Rendering
pub const ELECTION_YEAR: u16 = 2016;
pub const PARTY_LABEL: &str = "Democratic";

// Logging
pub const LOG_FILE: &str = ".store/candidatebot.log";
