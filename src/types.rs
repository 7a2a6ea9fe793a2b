use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The 18 elemental types of the core series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Type {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

/// Damage modifier of a single attacking/defending pair.
/// Pairs the chart doesn't name are `Effective` (x1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effectiveness {
    Immune,
    NotVeryEffective,
    Effective,
    SuperEffective,
}

impl From<Effectiveness> for f32 {
    fn from(eff: Effectiveness) -> f32 {
        match eff {
            Effectiveness::Immune => 0.0,
            Effectiveness::NotVeryEffective => 0.5,
            Effectiveness::Effective => 1.0,
            Effectiveness::SuperEffective => 2.0,
        }
    }
}

impl Type {
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    #[inline]
    pub fn iter() -> impl Iterator<Item = Type> {
        Self::ALL.iter().copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Electric => "Electric",
            Type::Grass => "Grass",
            Type::Ice => "Ice",
            Type::Fighting => "Fighting",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Flying => "Flying",
            Type::Psychic => "Psychic",
            Type::Bug => "Bug",
            Type::Rock => "Rock",
            Type::Ghost => "Ghost",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Steel => "Steel",
            Type::Fairy => "Fairy",
        }
    }

    /// How effective an attack of this type is against a defending type.
    ///
    /// One fixed chart for every generation, the per-generation chart drift
    /// of the early games is not modeled.
    pub fn effective(self, defending: Type) -> Effectiveness {
        use Effectiveness::*;

        match self {
            Type::Normal => match defending {
                Type::Rock | Type::Steel => NotVeryEffective,
                Type::Ghost => Immune,
                _ => Effective,
            },
            Type::Fire => match defending {
                Type::Grass | Type::Ice | Type::Bug | Type::Steel => SuperEffective,
                Type::Fire | Type::Water | Type::Rock | Type::Dragon => NotVeryEffective,
                _ => Effective,
            },
            Type::Water => match defending {
                Type::Fire | Type::Ground | Type::Rock => SuperEffective,
                Type::Water | Type::Grass | Type::Dragon => NotVeryEffective,
                _ => Effective,
            },
            Type::Electric => match defending {
                Type::Water | Type::Flying => SuperEffective,
                Type::Electric | Type::Grass | Type::Dragon => NotVeryEffective,
                Type::Ground => Immune,
                _ => Effective,
            },
            Type::Grass => match defending {
                Type::Water | Type::Ground | Type::Rock => SuperEffective,
                Type::Fire
                | Type::Grass
                | Type::Poison
                | Type::Flying
                | Type::Bug
                | Type::Dragon
                | Type::Steel => NotVeryEffective,
                _ => Effective,
            },
            Type::Ice => match defending {
                Type::Grass | Type::Ground | Type::Flying | Type::Dragon => SuperEffective,
                Type::Fire | Type::Water | Type::Ice | Type::Steel => NotVeryEffective,
                _ => Effective,
            },
            Type::Fighting => match defending {
                Type::Normal | Type::Ice | Type::Rock | Type::Dark | Type::Steel => SuperEffective,
                Type::Poison | Type::Flying | Type::Psychic | Type::Bug | Type::Fairy => {
                    NotVeryEffective
                }
                Type::Ghost => Immune,
                _ => Effective,
            },
            Type::Poison => match defending {
                Type::Grass | Type::Fairy => SuperEffective,
                Type::Poison | Type::Ground | Type::Rock | Type::Ghost => NotVeryEffective,
                Type::Steel => Immune,
                _ => Effective,
            },
            Type::Ground => match defending {
                Type::Fire | Type::Electric | Type::Poison | Type::Rock | Type::Steel => {
                    SuperEffective
                }
                Type::Grass | Type::Bug => NotVeryEffective,
                Type::Flying => Immune,
                _ => Effective,
            },
            Type::Flying => match defending {
                Type::Grass | Type::Fighting | Type::Bug => SuperEffective,
                Type::Electric | Type::Rock | Type::Steel => NotVeryEffective,
                _ => Effective,
            },
            Type::Psychic => match defending {
                Type::Fighting | Type::Poison => SuperEffective,
                Type::Psychic | Type::Steel => NotVeryEffective,
                Type::Dark => Immune,
                _ => Effective,
            },
            Type::Bug => match defending {
                Type::Grass | Type::Psychic | Type::Dark => SuperEffective,
                Type::Fire
                | Type::Fighting
                | Type::Poison
                | Type::Flying
                | Type::Ghost
                | Type::Steel
                | Type::Fairy => NotVeryEffective,
                _ => Effective,
            },
            Type::Rock => match defending {
                Type::Fire | Type::Ice | Type::Flying | Type::Bug => SuperEffective,
                Type::Fighting | Type::Ground | Type::Steel => NotVeryEffective,
                _ => Effective,
            },
            Type::Ghost => match defending {
                Type::Psychic | Type::Ghost => SuperEffective,
                Type::Dark => NotVeryEffective,
                Type::Normal => Immune,
                _ => Effective,
            },
            Type::Dragon => match defending {
                Type::Dragon => SuperEffective,
                Type::Steel => NotVeryEffective,
                Type::Fairy => Immune,
                _ => Effective,
            },
            Type::Dark => match defending {
                Type::Psychic | Type::Ghost => SuperEffective,
                Type::Fighting | Type::Dark | Type::Fairy => NotVeryEffective,
                _ => Effective,
            },
            Type::Steel => match defending {
                Type::Ice | Type::Rock | Type::Fairy => SuperEffective,
                Type::Fire | Type::Water | Type::Electric | Type::Steel => NotVeryEffective,
                _ => Effective,
            },
            Type::Fairy => match defending {
                Type::Fighting | Type::Dragon | Type::Dark => SuperEffective,
                Type::Fire | Type::Poison | Type::Steel => NotVeryEffective,
                _ => Effective,
            },
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
pub struct ParseTypeError(String);

impl fmt::Display for ParseTypeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "`{}` is not a pokemon type", self.0)
    }
}

impl std::error::Error for ParseTypeError {}

impl FromStr for Type {
    type Err = ParseTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = match s.to_lowercase().as_str() {
            "normal" => Type::Normal,
            "fire" => Type::Fire,
            "water" => Type::Water,
            "electric" => Type::Electric,
            "grass" => Type::Grass,
            "ice" => Type::Ice,
            "fighting" => Type::Fighting,
            "poison" => Type::Poison,
            "ground" => Type::Ground,
            "flying" => Type::Flying,
            "psychic" => Type::Psychic,
            "bug" => Type::Bug,
            "rock" => Type::Rock,
            "ghost" => Type::Ghost,
            "dragon" => Type::Dragon,
            "dark" => Type::Dark,
            "steel" => Type::Steel,
            "fairy" => Type::Fairy,
            _ => return Err(ParseTypeError(s.to_owned())),
        };

        Ok(t)
    }
}
