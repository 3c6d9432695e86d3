//! Seed data for the competition
//!
//! The console never loads records from anywhere else.

use chrono::Utc;

use super::{Badge, Proposal, ProposalStatus, Ranking, Team, User};

fn badge(id: &str, name: &str, icon: &str, description: &str) -> Badge {
    Badge {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        description: description.to_string(),
        unlocked_at: None,
    }
}

/// Every badge that can be unlocked
pub fn badges() -> Vec<Badge> {
    vec![
        badge("1", "Pionero Élite", "🚀", "Primeros 100 participantes"),
        badge("2", "Samurái del Código", "⚔️", "Completa 10 tareas técnicas"),
        badge("3", "Visionario de Equipo", "🧠", "Crea un equipo ganador"),
        badge("4", "Voz de la Comunidad", "📣", "Envía 5 propuestas aprobadas"),
    ]
}

/// Avatar URL for a seed string
pub fn avatar_url(seed: &str) -> String {
    format!("https://api.dicebear.com/7.x/avataaars/svg?seed={}", seed)
}

pub fn users() -> Vec<User> {
    let all = badges();
    vec![
        User {
            id: "u1".to_string(),
            name: "Neo Spectra".to_string(),
            email: "neo@nexus.com".to_string(),
            avatar: avatar_url("neo"),
            points: 2450,
            rank: 1,
            team_id: Some("t1".to_string()),
            is_team_admin: true,
            badges: vec![all[0].clone(), all[1].clone()],
        },
        User {
            id: "u2".to_string(),
            name: "Ghost Protocol".to_string(),
            email: "ghost@nexus.com".to_string(),
            avatar: avatar_url("ghost"),
            points: 2100,
            rank: 2,
            team_id: Some("t1".to_string()),
            is_team_admin: false,
            badges: vec![all[0].clone()],
        },
    ]
}

pub fn teams() -> Vec<Team> {
    vec![
        Team {
            id: "t1".to_string(),
            name: "Dragones Cibernéticos".to_string(),
            logo: "🐲".to_string(),
            description: "Desarrollo de alta velocidad y máximo riesgo.".to_string(),
            points: 4550,
            rank: 1,
            members: vec!["u1".to_string(), "u2".to_string()],
        },
        Team {
            id: "t2".to_string(),
            name: "Nómadas del Vacío".to_string(),
            logo: "🌑".to_string(),
            description: "Dominando los horizontes desconocidos del código.".to_string(),
            points: 3900,
            rank: 2,
            members: vec![],
        },
    ]
}

pub fn proposals() -> Vec<Proposal> {
    let now = Utc::now();
    vec![
        Proposal {
            id: "p1".to_string(),
            title: "Depurador IA Integrado".to_string(),
            description: "Un asistente de IA en tiempo real para identificar cuellos de botella en la lógica central."
                .to_string(),
            author_id: "u1".to_string(),
            author_name: "Neo Spectra".to_string(),
            votes: 42,
            status: ProposalStatus::Active,
            created_at: now,
        },
        Proposal {
            id: "p2".to_string(),
            title: "Sincronización de Latencia Cero".to_string(),
            description: "Nuevo protocolo para sincronizar nodos de competición distribuidos.".to_string(),
            author_id: "u2".to_string(),
            author_name: "Ghost Protocol".to_string(),
            votes: 28,
            status: ProposalStatus::Pending,
            created_at: now,
        },
    ]
}

/// Leaderboard rows, one per user, scored by points
pub fn rankings() -> Vec<Ranking> {
    users()
        .into_iter()
        .map(|u| Ranking {
            user_id: u.id,
            score: u.points,
        })
        .collect()
}
