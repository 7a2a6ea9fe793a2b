use crate::types::Type;
use serde::Serialize;
use std::collections::BTreeMap;

/// How a defender with the given typing takes hits from the whole type
/// domain. Neutral (x1) matchups are omitted entirely; a type can appear
/// in at most one of the three buckets.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TypeMatchups {
    /// Multiplier above 1, the defender takes extra damage.
    pub weaknesses: BTreeMap<Type, f32>,
    /// Multiplier below 1 but above 0.
    pub resistances: BTreeMap<Type, f32>,
    /// Attacks that don't affect the defender at all.
    pub immunities: Vec<Type>,
}

impl TypeMatchups {
    pub fn is_empty(&self) -> bool {
        self.weaknesses.is_empty() && self.resistances.is_empty() && self.immunities.is_empty()
    }
}

/// Combined matchups for a mono or dual typed defender.
///
/// Each attacking type starts at x1 and gets multiplied by its chart entry
/// against every defending type, so stacked resistances end up at x0.25 and
/// stacked weaknesses at x4.
pub fn type_matchups(defenders: &[Type]) -> TypeMatchups {
    let mut matchups = TypeMatchups::default();

    for attacking in Type::iter() {
        let modifier: f32 = defenders
            .iter()
            .map(|defending| attacking.effective(*defending))
            .map(f32::from)
            .product();

        if modifier == 0.0 {
            matchups.immunities.push(attacking);
        } else if modifier > 1.0 {
            matchups.weaknesses.insert(attacking, modifier);
        } else if modifier < 1.0 {
            matchups.resistances.insert(attacking, modifier);
        }
    }

    matchups
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn types(names: &[&str]) -> Vec<Type> {
        names.iter().map(|v| v.parse().unwrap()).collect()
    }

    #[test]
    fn water_defender() {
        let matchups = type_matchups(&types(&["water"]));

        let weaknesses: BTreeMap<Type, f32> =
            vec![(Type::Grass, 2.0), (Type::Electric, 2.0)].into_iter().collect();
        let resistances: BTreeMap<Type, f32> = vec![
            (Type::Fire, 0.5),
            (Type::Water, 0.5),
            (Type::Ice, 0.5),
            (Type::Steel, 0.5),
        ]
        .into_iter()
        .collect();

        assert_eq!(matchups.weaknesses, weaknesses);
        assert_eq!(matchups.resistances, resistances);
        assert!(matchups.immunities.is_empty());
    }

    #[test]
    fn single_type_is_a_chart_row() {
        for defender in Type::iter() {
            let matchups = type_matchups(&[defender]);

            for attacking in Type::iter() {
                let expected = f32::from(attacking.effective(defender));
                let got = matchups
                    .weaknesses
                    .get(&attacking)
                    .or_else(|| matchups.resistances.get(&attacking))
                    .copied()
                    .unwrap_or_else(|| {
                        if matchups.immunities.contains(&attacking) {
                            0.0
                        } else {
                            1.0
                        }
                    });

                assert_eq!(got, expected, "{} vs {}", attacking, defender);
            }
        }
    }

    #[test]
    fn dual_type_multiplies_and_ignores_order() {
        let a = type_matchups(&types(&["ghost", "dark"]));
        let b = type_matchups(&types(&["dark", "ghost"]));
        assert_eq!(a, b);

        // ghost/dark stacks two immunities and a x4 weakness
        assert!(a.immunities.contains(&Type::Normal));
        assert!(a.immunities.contains(&Type::Psychic));
        assert_eq!(a.weaknesses.get(&Type::Fairy), Some(&2.0));
        assert_eq!(a.resistances.get(&Type::Poison), Some(&0.5));

        let rock_ground = type_matchups(&types(&["rock", "ground"]));
        assert_eq!(rock_ground.weaknesses.get(&Type::Water), Some(&4.0));
        assert_eq!(rock_ground.weaknesses.get(&Type::Grass), Some(&4.0));
        assert_eq!(rock_ground.immunities, vec![Type::Electric]);
    }

    #[test]
    fn quarter_resistance_stacks() {
        // both steel and flying resist bug
        let matchups = type_matchups(&types(&["steel", "flying"]));
        assert_eq!(matchups.resistances.get(&Type::Bug), Some(&0.25));
    }

    #[test]
    fn buckets_are_disjoint_and_never_neutral() {
        let pairs = [
            types(&["water"]),
            types(&["ghost", "dark"]),
            types(&["steel", "fairy"]),
            types(&["normal"]),
            types(&["dragon", "ground"]),
        ];

        for defenders in pairs.iter() {
            let matchups = type_matchups(defenders);

            for (t, modifier) in matchups.weaknesses.iter() {
                assert!(*modifier > 1.0);
                assert!(!matchups.resistances.contains_key(t));
                assert!(!matchups.immunities.contains(t));
            }

            for modifier in matchups.resistances.values() {
                assert!(*modifier < 1.0 && *modifier > 0.0);
            }

            for t in matchups.immunities.iter() {
                assert!(!matchups.weaknesses.contains_key(t));
                assert!(!matchups.resistances.contains_key(t));
            }
        }
    }

    #[test]
    fn no_defender_means_all_neutral() {
        assert!(type_matchups(&[]).is_empty());
    }
}
