//! Stock challenges shipped with the crate

use super::challenge::{Challenge, Difficulty};

struct Entry {
    id: u32,
    title: &'static str,
    description: &'static str,
    category: &'static str,
    difficulty: Difficulty,
    points: u32,
    level: u32,
    tags: &'static [&'static str],
}

static ENTRIES: &[Entry] = &[
    Entry {
        id: 1,
        title: "Neural SQL Injection",
        description: "Infiltrate the database through quantum SQL vulnerabilities",
        category: "Web",
        difficulty: Difficulty::Easy,
        points: 100,
        level: 1,
        tags: &["SQL", "Injection"],
    },
    Entry {
        id: 2,
        title: "XSS Quantum Bypass",
        description: "Breach dimensional XSS protection protocols",
        category: "Web",
        difficulty: Difficulty::Medium,
        points: 200,
        level: 1,
        tags: &["XSS", "Filter Bypass"],
    },
    Entry {
        id: 3,
        title: "Binary Neural Override",
        description: "Exploit cybernetic memory buffer systems",
        category: "Pwn",
        difficulty: Difficulty::Hard,
        points: 300,
        level: 2,
        tags: &["Buffer Overflow"],
    },
    Entry {
        id: 4,
        title: "Quantum Cryptography Break",
        description: "Decrypt inter-dimensional communication channels",
        category: "Crypto",
        difficulty: Difficulty::Medium,
        points: 250,
        level: 2,
        tags: &["Encryption", "Decryption"],
    },
    Entry {
        id: 5,
        title: "Digital Forensics Matrix",
        description: "Trace data fragments through the cyber-matrix",
        category: "Forensics",
        difficulty: Difficulty::Easy,
        points: 150,
        level: 1,
        tags: &["Network Logs", "Base64"],
    },
    Entry {
        id: 6,
        title: "API Neural Network Hack",
        description: "Infiltrate AI-powered REST API defenses",
        category: "Web",
        difficulty: Difficulty::Hard,
        points: 400,
        level: 3,
        tags: &["REST", "API"],
    },
];

pub(super) fn challenges() -> Vec<Challenge> {
    ENTRIES
        .iter()
        .map(|e| Challenge {
            id: e.id,
            title: e.title.to_string(),
            description: e.description.to_string(),
            category: e.category.to_string(),
            difficulty: e.difficulty,
            points: e.points,
            level: e.level,
            tags: e.tags.iter().map(|t| t.to_string()).collect(),
        })
        .collect()
}
