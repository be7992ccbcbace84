//! Community page: leaderboard, guilds and challenges

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommunityTab {
    Leaderboard,
    Guilds,
    Challenges,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub id: String,
    pub rank: u32,
    pub name: String,
    pub avatar_initials: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild: Option<String>,
    pub xp: u32,
    pub streak: u32,
    pub is_current_user: bool,
}

/// Rank column: crowns for the podium, `#N` below it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RankBadge {
    Gold,
    Silver,
    Bronze,
    Number(String),
}

impl LeaderboardEntry {
    pub fn is_podium(&self) -> bool {
        (1..=3).contains(&self.rank)
    }

    pub fn badge(&self) -> RankBadge {
        match self.rank {
            1 => RankBadge::Gold,
            2 => RankBadge::Silver,
            3 => RankBadge::Bronze,
            n => RankBadge::Number(format!("#{n}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GuildRole {
    Leader,
    Member,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuildMember {
    pub id: String,
    pub name: String,
    pub role: GuildRole,
    pub xp_contribution: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildPost {
    pub id: String,
    pub author: String,
    pub content: String,
    pub timestamp: String,
    pub likes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guild {
    pub id: String,
    pub name: String,
    pub description: String,
    pub member_count: u32,
    pub is_private: bool,
    pub user_is_member: bool,
    #[serde(default)]
    pub members: Vec<GuildMember>,
    #[serde(default)]
    pub activity_feed: Vec<String>,
    #[serde(default)]
    pub posts: Vec<GuildPost>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChallengeKind {
    Solo,
    Guild,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ChallengeKind,
    pub current_progress: u32,
    pub target: u32,
    /// XP, NODES, BOSSES...
    pub unit: String,
    pub reward: String,
    pub days_left: u32,
    pub completed: bool,
}

impl Challenge {
    /// Rounded to the nearest whole percent; 0 when the target is 0
    pub fn progress_percent(&self) -> u32 {
        if self.target == 0 {
            return 0;
        }
        (f64::from(self.current_progress) / f64::from(self.target) * 100.0).round() as u32
    }
}

pub fn demo_leaderboard() -> Vec<LeaderboardEntry> {
    let entry = |id: &str, rank, name: &str, initials: &str, guild: &str, xp, streak, me| {
        LeaderboardEntry {
            id: id.to_string(),
            rank,
            name: name.to_string(),
            avatar_initials: initials.to_string(),
            guild: Some(guild.to_string()),
            xp,
            streak,
            is_current_user: me,
        }
    };

    vec![
        entry("u1", 1, "CodeLuis", "CL", "Frontend Ninjas", 2340, 45, false),
        entry("u2", 2, "Sarah_Dev", "SD", "React Warriors", 2100, 30, false),
        entry("u3", 3, "MikeTs", "MT", "TypeScript Pros", 1980, 12, false),
        entry("u4", 4, "AnaCode", "AC", "Frontend Ninjas", 1850, 20, false),
        entry("u17", 17, "Silviu", "S", "Fullstack JS", 1240, 12, true),
    ]
}

pub fn demo_guilds() -> Vec<Guild> {
    let member = |id: &str, name: &str, role, xp| GuildMember {
        id: id.to_string(),
        name: name.to_string(),
        role,
        xp_contribution: xp,
    };
    let post = |id: &str, author: &str, content: &str, timestamp: &str, likes| GuildPost {
        id: id.to_string(),
        author: author.to_string(),
        content: content.to_string(),
        timestamp: timestamp.to_string(),
        likes,
    };

    vec![
        Guild {
            id: "g1".to_string(),
            name: "Fullstack JS Warriors".to_string(),
            description: "Grupo para programadores que quieren llegar a Fullstack en 2025. Nos enfocamos en el stack MERN.".to_string(),
            member_count: 12,
            is_private: true,
            user_is_member: true,
            members: vec![
                member("m1", "DevMaster", GuildRole::Leader, 5000),
                member("m2", "Silviu", GuildRole::Member, 1240),
                member("m3", "NewbieJS", GuildRole::Member, 800),
            ],
            activity_feed: vec![
                "@Ana ha dominado 'Algoritmos básicos'".to_string(),
                "@Pepe ha hecho 120 tarjetas de repaso hoy".to_string(),
                "El gremio ha superado el reto semanal de 10.000 XP".to_string(),
            ],
            posts: vec![
                post("post1", "DevMaster", "¡Chicos! He encontrado un recurso genial para React Hooks.", "Hace 2h", 5),
                post("post2", "Silviu", "¿Alguien para estudiar juntos mañana a las 18:00?", "Hace 4h", 2),
            ],
        },
        Guild {
            id: "g2".to_string(),
            name: "English Grinders".to_string(),
            description: "Daily English practice for tech professionals. No excuses!".to_string(),
            member_count: 45,
            is_private: false,
            user_is_member: false,
            members: Vec::new(),
            activity_feed: Vec::new(),
            posts: Vec::new(),
        },
        Guild {
            id: "g3".to_string(),
            name: "Pythonistas".to_string(),
            description: "Data Science y Backend con Python. Retos semanales.".to_string(),
            member_count: 28,
            is_private: false,
            user_is_member: false,
            members: Vec::new(),
            activity_feed: Vec::new(),
            posts: Vec::new(),
        },
    ]
}

pub fn demo_challenges() -> Vec<Challenge> {
    let challenge = |id: &str,
                     title: &str,
                     description: &str,
                     kind,
                     (current, target): (u32, u32),
                     unit: &str,
                     reward: &str,
                     days_left| Challenge {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        kind,
        current_progress: current,
        target,
        unit: unit.to_string(),
        reward: reward.to_string(),
        days_left,
        completed: false,
    };

    vec![
        challenge("ch1", "Semana Imparable", "Gana 500 XP esta semana sin romper la racha.", ChallengeKind::Solo, (320, 500), "XP", "50 Gemas", 3),
        challenge("ch2", "Explorador de Nodos", "Completa 3 nodos nuevos este mes.", ChallengeKind::Solo, (1, 3), "NODES", "Insignia Explorador", 12),
        challenge("ch3", "Dominio Colectivo", "Como gremio, completad 10 boss fights.", ChallengeKind::Guild, (7, 10), "BOSSES", "Bonus XP Gremio", 5),
    ]
}

#[derive(Debug, Clone)]
pub struct CommunityView {
    tab: CommunityTab,
    leaderboard: Vec<LeaderboardEntry>,
    guilds: Vec<Guild>,
    challenges: Vec<Challenge>,
    selected_guild: Option<String>,
}

impl CommunityView {
    /// Opens on the guilds tab with the user's own guild selected
    pub fn new(
        leaderboard: Vec<LeaderboardEntry>,
        guilds: Vec<Guild>,
        challenges: Vec<Challenge>,
    ) -> Self {
        let selected_guild = guilds
            .iter()
            .find(|g| g.user_is_member)
            .map(|g| g.id.clone());

        Self {
            tab: CommunityTab::Guilds,
            leaderboard,
            guilds,
            challenges,
            selected_guild,
        }
    }

    pub fn demo() -> Self {
        Self::new(demo_leaderboard(), demo_guilds(), demo_challenges())
    }

    pub fn tab(&self) -> CommunityTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: CommunityTab) {
        self.tab = tab;
    }

    pub fn leaderboard(&self) -> &[LeaderboardEntry] {
        &self.leaderboard
    }

    pub fn current_user(&self) -> Option<&LeaderboardEntry> {
        self.leaderboard.iter().find(|e| e.is_current_user)
    }

    pub fn guilds(&self) -> &[Guild] {
        &self.guilds
    }

    pub fn challenges(&self) -> &[Challenge] {
        &self.challenges
    }

    pub fn select_guild(&mut self, guild_id: &str) {
        if self.guilds.iter().any(|g| g.id == guild_id) {
            self.selected_guild = Some(guild_id.to_string());
        }
    }

    /// Back to the guild list
    pub fn clear_guild(&mut self) {
        self.selected_guild = None;
    }

    pub fn selected_guild(&self) -> Option<&Guild> {
        let id = self.selected_guild.as_deref()?;
        self.guilds.iter().find(|g| g.id == id)
    }
}
