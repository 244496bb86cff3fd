//! Ability grants from Set Djinn.

use std::collections::BTreeSet;

use super::compatibility::{ElementCompatibility, element_compatibility};
use crate::env::AbilityOracle;
use crate::state::{AbilityId, Team, Unit};

/// Abilities a single Djinn can grant one unit from its matching group.
pub const GRANTS_PER_DJINN: usize = 2;

/// Leading ids of one relationship group, capped at [`GRANTS_PER_DJINN`].
fn capped(group: &[AbilityId]) -> &[AbilityId] {
    &group[..group.len().min(GRANTS_PER_DJINN)]
}

/// Abilities the team's Set Djinn currently grant to `unit`.
///
/// Each Djinn contributes the first [`GRANTS_PER_DJINN`] ids of the group
/// matching its relationship with the unit. Duplicates are dropped, keeping
/// the first occurrence in equip order.
pub fn granted_abilities(unit: &Unit, team: &Team) -> Vec<AbilityId> {
    let mut seen = BTreeSet::new();
    let mut granted = Vec::new();

    for djinn in team.set_djinn() {
        let Some(groups) = djinn.granted_abilities.get(&unit.id) else {
            continue;
        };
        let group = match element_compatibility(unit.element, djinn.element) {
            ElementCompatibility::Same => &groups.same,
            ElementCompatibility::Counter => &groups.counter,
            ElementCompatibility::Neutral => &groups.neutral,
        };
        for id in capped(group) {
            if seen.insert(id.clone()) {
                granted.push(id.clone());
            }
        }
    }

    granted
}

/// Every ability any equipped Djinn could grant `unit`, regardless of state.
///
/// Ids past the per-group cap are never granted, so they are never revoked
/// either; a unit that learned one on its own keeps it.
fn grantable_abilities(unit: &Unit, team: &Team) -> BTreeSet<AbilityId> {
    team.equipped_djinn()
        .iter()
        .filter_map(|d| d.granted_abilities.get(&unit.id))
        .flat_map(|groups| {
            capped(&groups.same)
                .iter()
                .chain(capped(&groups.counter))
                .chain(capped(&groups.neutral))
        })
        .cloned()
        .collect()
}

/// Returns `unit` with its Djinn-sourced abilities brought in line with the
/// team's current Djinn states.
///
/// Abilities a Djinn could grant but currently does not are removed from both
/// the ability list and the unlocked set; currently granted abilities are
/// added and unlocked. Definitions come from `catalog`; ids missing from it
/// are skipped.
pub fn merge_djinn_abilities(unit: &Unit, team: &Team, catalog: &dyn AbilityOracle) -> Unit {
    let granted = granted_abilities(unit, team);
    let granted_set: BTreeSet<&AbilityId> = granted.iter().collect();
    let revoked: BTreeSet<AbilityId> = grantable_abilities(unit, team)
        .into_iter()
        .filter(|id| !granted_set.contains(id))
        .collect();

    let mut merged = unit.clone();
    merged.abilities.retain(|a| !revoked.contains(&a.id));
    merged.unlocked_abilities.retain(|id| !revoked.contains(id));

    for id in granted {
        match catalog.ability(&id) {
            Some(ability) => {
                if merged.ability(&id).is_none() {
                    merged.abilities.push(ability.clone());
                }
                merged.unlocked_abilities.insert(id);
            }
            None => {
                tracing::warn!(unit = %unit.id, ability = %id, "djinn grant missing from catalog");
            }
        }
    }

    merged
}

/// Applies [`merge_djinn_abilities`] to every unit of the team.
pub fn merge_team_abilities(team: &Team, catalog: &dyn AbilityOracle) -> Team {
    let mut merged = team.clone();
    for unit in merged.units_mut() {
        *unit = merge_djinn_abilities(unit, team, catalog);
    }
    merged
}
