//! Achievement definitions and unlock checks

use chrono::Duration;
use serde::Serialize;

use super::state::PlayerProgress;
use crate::catalog::Catalog;

/// Unique identifier for each achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementId {
    FirstBlood,
    SpeedDemon,
    NeuralHacker,
    QuantumMaster,
    CodeBreaker,
    GhostInTheShell,
}

impl AchievementId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstBlood => "first_blood",
            Self::SpeedDemon => "speed_demon",
            Self::NeuralHacker => "neural_hacker",
            Self::QuantumMaster => "quantum_master",
            Self::CodeBreaker => "code_breaker",
            Self::GhostInTheShell => "ghost_in_the_shell",
        }
    }
}

/// How rare an achievement is, for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
    Mythic,
}

/// Achievement definition with all metadata
#[derive(Debug, Clone, Serialize)]
pub struct Achievement {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub rarity: Rarity,
}

/// All achievement definitions
pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: AchievementId::FirstBlood,
        name: "First Blood",
        description: "Solved your first challenge",
        icon: "🩸",
        rarity: Rarity::Common,
    },
    Achievement {
        id: AchievementId::SpeedDemon,
        name: "Speed Demon",
        description: "Solved a challenge in under 5 minutes",
        icon: "⚡",
        rarity: Rarity::Rare,
    },
    Achievement {
        id: AchievementId::NeuralHacker,
        name: "Neural Hacker",
        description: "Solved 10 challenges",
        icon: "🧠",
        rarity: Rarity::Epic,
    },
    Achievement {
        id: AchievementId::QuantumMaster,
        name: "Quantum Master",
        description: "Reached level 15",
        icon: "🌌",
        rarity: Rarity::Legendary,
    },
    Achievement {
        id: AchievementId::CodeBreaker,
        name: "Code Breaker",
        description: "Solved all crypto challenges",
        icon: "🔓",
        rarity: Rarity::Mythic,
    },
    Achievement {
        id: AchievementId::GhostInTheShell,
        name: "Ghost in the Shell",
        description: "Solved all steganography challenges",
        icon: "👻",
        rarity: Rarity::Mythic,
    },
];

impl Achievement {
    /// Get achievement definition by ID
    pub fn get(id: AchievementId) -> Option<&'static Achievement> {
        ACHIEVEMENTS.iter().find(|a| a.id == id)
    }
}

const SPEED_DEMON_LIMIT_SECS: i64 = 5 * 60;
const NEURAL_HACKER_SOLVES: usize = 10;
const QUANTUM_MASTER_LEVEL: u32 = 15;
const CRYPTO_CATEGORY: &str = "Crypto";
const STEGO_CATEGORY: &str = "Stego";

/// What the checks look at
pub struct AchievementInput<'a> {
    pub progress: &'a PlayerProgress,
    pub catalog: &'a Catalog,
    /// Shortest open-to-solve time seen this session
    pub fastest_solve: Option<Duration>,
}

/// Return achievements whose condition now holds and that are not yet unlocked
pub fn check_achievements(
    input: &AchievementInput<'_>,
    unlocked: &[AchievementId],
) -> Vec<AchievementId> {
    let solved = input.progress.solved_count();

    let candidates = [
        (AchievementId::FirstBlood, solved >= 1),
        (
            AchievementId::SpeedDemon,
            input
                .fastest_solve
                .is_some_and(|d| d < Duration::seconds(SPEED_DEMON_LIMIT_SECS)),
        ),
        (AchievementId::NeuralHacker, solved >= NEURAL_HACKER_SOLVES),
        (
            AchievementId::QuantumMaster,
            input.progress.current_level() >= QUANTUM_MASTER_LEVEL,
        ),
        (
            AchievementId::CodeBreaker,
            input.catalog.category_cleared(CRYPTO_CATEGORY, input.progress),
        ),
        (
            AchievementId::GhostInTheShell,
            input.catalog.category_cleared(STEGO_CATEGORY, input.progress),
        ),
    ];

    candidates
        .into_iter()
        .filter(|(id, met)| *met && !unlocked.contains(id))
        .map(|(id, _)| id)
        .collect()
}
