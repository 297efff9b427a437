//! Static table of the committees a resolution can be issued by.

use serde::Serialize;
use std::fmt;

/// Grammatical article used in the opening line ("Der Sicherheitsrat,").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Article {
    Der,
    Die,
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Article::Der => f.write_str("Der"),
            Article::Die => f.write_str("Die"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommitteeInfo {
    pub name: &'static str,
    pub article: Article,
    pub abbreviation: &'static str,
}

pub const COMMITTEES: &[CommitteeInfo] = &[
    CommitteeInfo { name: "Sicherheitsrat", article: Article::Der, abbreviation: "SR" },
    CommitteeInfo { name: "Generalversammlung", article: Article::Die, abbreviation: "GV" },
    CommitteeInfo { name: "Abrüstungskommission", article: Article::Die, abbreviation: "AK" },
    CommitteeInfo {
        name: "Kommission für Recht und Ethik",
        article: Article::Die,
        abbreviation: "RE",
    },
    CommitteeInfo {
        name: "Kommission für Wissenschaft, Umwelt und Technik",
        article: Article::Die,
        abbreviation: "WUT",
    },
    CommitteeInfo {
        name: "Wirtschafts- und Sozialrat",
        article: Article::Der,
        abbreviation: "WS",
    },
    CommitteeInfo {
        name: "Sonderkommission für Bildung und Gesundheit",
        article: Article::Die,
        abbreviation: "BG",
    },
    CommitteeInfo {
        name: "Historischer Sicherheitsrat",
        article: Article::Der,
        abbreviation: "HSR",
    },
];

/// Used whenever the abbreviation in the metadata is not recognized.
pub const DEFAULT_COMMITTEE: CommitteeInfo =
    CommitteeInfo { name: "Sicherheitsrat", article: Article::Der, abbreviation: "SR" };

impl CommitteeInfo {
    /// Looks up a committee by abbreviation, falling back to [`DEFAULT_COMMITTEE`].
    pub fn lookup(abbreviation: &str) -> &'static CommitteeInfo {
        COMMITTEES
            .iter()
            .find(|c| c.abbreviation == abbreviation)
            .unwrap_or(&DEFAULT_COMMITTEE)
    }

    /// Like [`lookup`](Self::lookup) but reports whether the key was known.
    pub fn find(abbreviation: &str) -> Option<&'static CommitteeInfo> {
        COMMITTEES.iter().find(|c| c.abbreviation == abbreviation)
    }

    /// The opening line of the operative body, e.g. "Die Generalversammlung,".
    pub fn opening_line(&self) -> String {
        format!("{} {},", self.article, self.name)
    }
}
