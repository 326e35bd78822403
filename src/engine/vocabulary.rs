//! Verb aliases and verb dispatch.
//!
//! Raw input goes through [`Vocabulary::normalize`] (upper-case, trim, swap a
//! leading alias for its canonical phrase) and then [`Vocabulary::parse`]
//! (pick the most specific registered verb and split off its arguments).

/// A verb the interpreter knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Go,
    Look,
    LookAt,
    LookUnder,
    Take,
    Drop,
    Push,
    Pull,
    Open,
    Close,
    Inventory,
    Wait,
    Help,
    Xyzzy,
}

/// Ends the session before dispatch.
pub const QUIT: &str = "QUIT";

const ALIASES: &[(&str, &[&str])] = &[
    ("GO NORTH", &["N", "NORTH"]),
    ("GO SOUTH", &["S", "SOUTH"]),
    ("GO WEST", &["W", "WEST"]),
    ("GO EAST", &["E", "EAST"]),
    ("GO IN", &["IN", "INSIDE", "ENTER"]),
    ("GO OUT", &["OUT", "OUTSIDE", "LEAVE"]),
    ("GO UP", &["UP"]),
    ("GO DOWN", &["DOWN"]),
    ("LOOK AT", &["EXAMINE", "INSPECT", "X"]),
    ("LOOK UNDER", &["LOOK BENEATH", "LOOK BELOW"]),
    ("TAKE", &["PICK UP", "GET"]),
    ("DROP", &["THROW"]),
    ("INVENTORY", &["I"]),
    ("WAIT", &["Z"]),
];

const VERBS: &[(&str, Verb)] = &[
    ("GO", Verb::Go),
    ("LOOK", Verb::Look),
    ("LOOK AT", Verb::LookAt),
    ("LOOK UNDER", Verb::LookUnder),
    ("TAKE", Verb::Take),
    ("DROP", Verb::Drop),
    ("PUSH", Verb::Push),
    ("PULL", Verb::Pull),
    ("OPEN", Verb::Open),
    ("CLOSE", Verb::Close),
    ("INVENTORY", Verb::Inventory),
    ("WAIT", Verb::Wait),
    ("HELP", Verb::Help),
    ("XYZZY", Verb::Xyzzy),
];

/// A normalized command split into its verb and argument tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub verb: Verb,
    pub args: Vec<String>,
}

/// Alias table and verb table, built once at startup and handed to the game.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// (alias, canonical), longest alias first.
    aliases: Vec<(String, String)>,
    canonicals: Vec<String>,
    /// Longest verb first, equal lengths in reverse lexical order.
    verbs: Vec<(String, Verb)>,
}

impl Vocabulary {
    pub fn standard() -> Self {
        Self::new(ALIASES, VERBS)
    }

    pub fn new(aliases: &[(&str, &[&str])], verbs: &[(&str, Verb)]) -> Self {
        let mut alias_pairs: Vec<(String, String)> = aliases
            .iter()
            .flat_map(|(canonical, list)| {
                list.iter()
                    .map(move |alias| (alias.to_uppercase(), canonical.to_uppercase()))
            })
            .collect();
        alias_pairs.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));

        let mut canonicals: Vec<String> = aliases.iter().map(|(c, _)| c.to_uppercase()).collect();
        canonicals.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        canonicals.dedup();

        let mut verb_list: Vec<(String, Verb)> = verbs
            .iter()
            .map(|(name, verb)| (name.to_uppercase(), *verb))
            .collect();
        verb_list.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| b.0.cmp(&a.0)));

        Vocabulary {
            aliases: alias_pairs,
            canonicals,
            verbs: verb_list,
        }
    }

    /// Upper-case, trim and replace a surface alias with its canonical phrase.
    /// Running it twice gives the same result as running it once.
    pub fn normalize(&self, raw: &str) -> String {
        let cmd = raw.trim().to_uppercase();

        if let Some((_, canonical)) = self.aliases.iter().find(|(alias, _)| *alias == cmd) {
            return canonical.clone();
        }

        let already_canonical = self
            .canonicals
            .iter()
            .any(|c| cmd == *c || starts_with_word(&cmd, c).is_some());
        if already_canonical {
            return cmd;
        }

        for (alias, canonical) in &self.aliases {
            if let Some(rest) = starts_with_word(&cmd, alias) {
                return format!("{canonical} {rest}");
            }
        }

        cmd
    }

    /// Match a normalized command against the verb table. `None` means the
    /// game doesn't understand it.
    pub fn parse(&self, command: &str) -> Option<Command> {
        for (name, verb) in &self.verbs {
            if command == name {
                return Some(Command {
                    verb: *verb,
                    args: Vec::new(),
                });
            }
            if let Some(rest) = starts_with_word(command, name) {
                return Some(Command {
                    verb: *verb,
                    args: rest.split(' ').map(str::to_string).collect(),
                });
            }
        }
        None
    }

    /// Canonical verb names in dispatch order.
    pub fn verb_names(&self) -> impl Iterator<Item = &str> {
        self.verbs.iter().map(|(name, _)| name.as_str())
    }
}

/// `Some(rest)` when `s` is `"<word> <rest>"`.
fn starts_with_word<'a>(s: &'a str, word: &str) -> Option<&'a str> {
    s.strip_prefix(word)?.strip_prefix(' ')
}
