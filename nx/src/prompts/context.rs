//! State summary embedded in the assistant's system prompt

use crate::state::DomainState;

/// Marker used in place of the user line when nobody is signed in
pub const NO_ACTIVE_USER: &str = "sin usuario activo";

/// How many teams the summary lists
pub const TOP_TEAMS: usize = 3;

/// Project a state snapshot into the summary block
///
/// Lists the current user's name, points and rank, the first three teams in
/// their current order, and the number of proposals. Pure and deterministic.
pub fn build_context(state: &DomainState) -> String {
    let user_line = match &state.current_user {
        Some(user) => format!("{} ({} puntos, Rango #{})", user.name, user.points, user.rank),
        None => NO_ACTIVE_USER.to_string(),
    };

    let teams_line = if state.teams.is_empty() {
        "ninguno".to_string()
    } else {
        state
            .teams
            .iter()
            .take(TOP_TEAMS)
            .map(|t| format!("{} con {}pts", t.name, t.points))
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "- Usuario: {}\n- Mejores Equipos: {}\n- Propuestas Activas: {}",
        user_line,
        teams_line,
        state.proposals.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Team;
    use crate::state::DomainStore;

    fn team(id: &str, name: &str, points: i64) -> Team {
        Team {
            id: id.to_string(),
            name: name.to_string(),
            logo: String::new(),
            description: String::new(),
            points,
            rank: 0,
            members: vec![],
        }
    }

    #[test]
    fn test_context_with_user() {
        let state = DomainStore::seeded().snapshot();
        let ctx = build_context(&state);

        assert!(ctx.contains("Neo Spectra (2450 puntos, Rango #1)"));
        assert!(ctx.contains("Dragones Cibernéticos con 4550pts"));
        assert!(ctx.contains("Nómadas del Vacío con 3900pts"));
        assert!(ctx.contains("Propuestas Activas: 2"));
    }

    #[test]
    fn test_context_without_user() {
        let state = DomainStore::seeded_as("nobody").snapshot();
        let ctx = build_context(&state);

        assert!(ctx.contains(NO_ACTIVE_USER));
        assert!(ctx.contains("Dragones Cibernéticos"));
    }

    #[test]
    fn test_context_lists_at_most_three_teams_in_order() {
        let mut state = DomainStore::seeded().snapshot();
        state.teams = vec![
            team("a", "Alfa", 10),
            team("b", "Beta", 900),
            team("c", "Gamma", 30),
            team("d", "Delta", 5000),
        ];
        let ctx = build_context(&state);

        assert!(ctx.contains("Alfa con 10pts, Beta con 900pts, Gamma con 30pts"));
        assert!(!ctx.contains("Delta"));
    }

    #[test]
    fn test_context_empty_state() {
        let ctx = build_context(&DomainState::default());
        assert!(ctx.contains(NO_ACTIVE_USER));
        assert!(ctx.contains("Mejores Equipos: ninguno"));
        assert!(ctx.contains("Propuestas Activas: 0"));
    }

    #[test]
    fn test_context_is_deterministic() {
        let state = DomainStore::seeded().snapshot();
        assert_eq!(build_context(&state), build_context(&state));
    }
}
