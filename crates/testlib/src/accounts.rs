//! Bech32 addresses used as message senders in tests.

/// A regular user account.
pub const SENDER: &str = "osmo1cyyzpxplxdzkeea7kwsydadg87357qnahakaks";
