//! Seed data loaded at process start

use super::activity::{ActivityEntry, ActivityKind};
use super::goal::{Goal, GoalStatus};
use super::mission::{Mission, MissionStatus, MissionType, SubTask};
use super::skill_tree::{
    Category, NodeStatus, NodeType, SkillLink, SkillNode, SkillTreeData, SkillTrees,
};
use super::user::UserStats;

use Category::*;
use NodeStatus::*;
use NodeType::*;

pub fn user() -> UserStats {
    UserStats {
        name: "Silviu".to_string(),
        level: 7,
        current_xp: 4320,
        next_level_xp: 5000,
        streak_days: 12,
        gems: 320,
    }
}

pub fn missions() -> Vec<Mission> {
    vec![
        Mission {
            id: "m1".to_string(),
            title: "Fundamentos de HTML".to_string(),
            kind: MissionType::Learn,
            duration_min: 25,
            xp_reward: 150,
            status: MissionStatus::Pending,
            sub_tasks: Some(vec![
                SubTask {
                    id: "st1".to_string(),
                    title: "Ver vídeo 'HTML Básico'".to_string(),
                    duration_min: 15,
                    completed: false,
                },
                SubTask {
                    id: "st2".to_string(),
                    title: "Hacer quiz de 10 preguntas".to_string(),
                    duration_min: 10,
                    completed: false,
                },
            ]),
            topic: Some("Programación".to_string()),
            node_id: None,
        },
        Mission {
            id: "m2".to_string(),
            title: "Repasar 30 tarjetas de JavaScript".to_string(),
            kind: MissionType::Review,
            duration_min: 10,
            xp_reward: 50,
            status: MissionStatus::Pending,
            sub_tasks: None,
            topic: None,
            node_id: None,
        },
        Mission {
            id: "m3".to_string(),
            title: "Examen mini 'HTML + CSS básico'".to_string(),
            kind: MissionType::Boss,
            duration_min: 20,
            xp_reward: 500,
            status: MissionStatus::Pending,
            sub_tasks: None,
            topic: Some("Evaluación".to_string()),
            node_id: None,
        },
    ]
}

pub fn goal() -> Goal {
    Goal {
        title: "Fullstack Junior en 6 meses".to_string(),
        target_date: "14 de junio 2026".to_string(),
        progress_percent: 45,
        completed_nodes: 27,
        total_nodes: 60,
        status: GoalStatus::Ahead,
    }
}

pub fn activity() -> Vec<ActivityEntry> {
    let entry = |id: &str, message: &str, kind, timestamp: &str| ActivityEntry {
        id: id.to_string(),
        message: message.to_string(),
        kind,
        timestamp: timestamp.to_string(),
    };

    vec![
        entry(
            "a1",
            "Has completado el nodo HTML básico",
            ActivityKind::Complete,
            "hace 2h",
        ),
        entry(
            "a2",
            "Has aprobado el boss fight de POO",
            ActivityKind::Achievement,
            "ayer",
        ),
        entry(
            "a3",
            "Añadiste 'Clean Code' a recursos",
            ActivityKind::Add,
            "ayer",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn node(
    id: &str,
    x: f64,
    y: f64,
    title: &str,
    description: &str,
    kind: NodeType,
    status: NodeStatus,
    category: Category,
    level: u32,
    estimated_time: &str,
    xp_reward: u32,
) -> SkillNode {
    SkillNode {
        id: id.to_string(),
        x,
        y,
        title: title.to_string(),
        description: description.to_string(),
        kind,
        status,
        category,
        level,
        estimated_time: estimated_time.to_string(),
        xp_reward,
    }
}

fn links(pairs: &[(&str, &str)]) -> Vec<SkillLink> {
    pairs.iter().map(|(s, t)| SkillLink::new(*s, *t)).collect()
}

fn fullstack() -> SkillTreeData {
    SkillTreeData {
        nodes: vec![
            node("html-basics", 400.0, 300.0, "HTML Básico", "Estructura semántica y etiquetas básicas.", Lesson, Completed, Programming, 1, "45m", 100),
            node("css-basics", 600.0, 300.0, "CSS Fundamentos", "Selectores, colores y tipografía.", Lesson, Completed, Programming, 1, "60m", 120),
            node("git-init", 400.0, 450.0, "Git & GitHub", "Control de versiones básico.", Project, Completed, Cs, 1, "90m", 200),
            node("js-syntax", 800.0, 300.0, "JS Sintaxis", "Variables, loops y funciones.", Lesson, Decaying, Programming, 2, "120m", 150),
            node("dom-manipulation", 1000.0, 300.0, "DOM API", "Manipular el HTML desde JS.", Project, InProgress, Programming, 2, "3h", 300),
            node("fetch-api", 1200.0, 300.0, "Async & Fetch", "Consumo de APIs y promesas.", Lesson, Available, Programming, 3, "2h", 250),
            node("react-intro", 1400.0, 200.0, "React Intro", "Componentes y Props.", Lesson, Locked, Programming, 3, "2h", 300),
            node("vue-intro", 1400.0, 400.0, "Vue Intro", "La alternativa progresiva.", Lesson, Locked, Programming, 3, "2h", 300),
            node("node-basics", 1000.0, 500.0, "Node.js Básico", "Runtime y módulos.", Lesson, Available, Programming, 2, "1.5h", 150),
            node("express-api", 1200.0, 500.0, "Express API", "Creación de servidores REST.", Boss, Locked, Programming, 3, "4h", 600),
            node("english-tech", 200.0, 600.0, "Inglés Técnico", "Vocabulario esencial.", Quiz, Completed, Languages, 1, "30m", 80),
        ],
        links: links(&[
            ("html-basics", "css-basics"),
            ("css-basics", "js-syntax"),
            ("html-basics", "git-init"),
            ("js-syntax", "dom-manipulation"),
            ("dom-manipulation", "fetch-api"),
            ("fetch-api", "react-intro"),
            ("fetch-api", "vue-intro"),
            ("js-syntax", "node-basics"),
            ("node-basics", "express-api"),
        ]),
    }
}

fn python_ds() -> SkillTreeData {
    SkillTreeData {
        nodes: vec![
            node("py-basics", 400.0, 300.0, "Python Sintaxis", "Tipos de datos, listas y loops.", Lesson, Completed, Programming, 1, "2h", 100),
            node("py-functions", 600.0, 300.0, "Funciones", "Args, kwargs y lambdas.", Lesson, InProgress, Programming, 1, "1.5h", 120),
            node("py-datastruct", 800.0, 300.0, "Estructuras de Datos", "Diccionarios, Sets y Tuplas.", Lesson, Available, Cs, 2, "2h", 150),
            node("numpy", 1000.0, 200.0, "NumPy", "Cálculo numérico y matrices.", Project, Locked, Programming, 2, "3h", 250),
            node("pandas", 1000.0, 400.0, "Pandas", "Manipulación de DataFrames.", Lesson, Locked, Programming, 2, "4h", 250),
            node("matplotlib", 1200.0, 300.0, "Matplotlib", "Visualización de datos básica.", Project, Locked, Programming, 3, "3h", 300),
        ],
        links: links(&[
            ("py-basics", "py-functions"),
            ("py-functions", "py-datastruct"),
            ("py-datastruct", "numpy"),
            ("py-datastruct", "pandas"),
            ("numpy", "matplotlib"),
            ("pandas", "matplotlib"),
        ]),
    }
}

fn mobile() -> SkillTreeData {
    SkillTreeData {
        nodes: vec![
            node("dart-basics", 400.0, 300.0, "Dart Fundamentos", "Lenguaje base para Flutter.", Lesson, Completed, Programming, 1, "2h", 100),
            node("flutter-widgets", 600.0, 300.0, "Flutter Widgets", "Stateless vs Stateful.", Lesson, InProgress, Programming, 1, "3h", 150),
            node("flutter-layout", 800.0, 300.0, "Layouts", "Flex, Row, Column, Stack.", Project, Available, Programming, 2, "4h", 200),
            node("state-mgmt", 1000.0, 300.0, "Gestión de Estado", "Provider, Riverpod, Bloc.", Boss, Locked, Cs, 3, "6h", 500),
        ],
        links: links(&[
            ("dart-basics", "flutter-widgets"),
            ("flutter-widgets", "flutter-layout"),
            ("flutter-layout", "state-mgmt"),
        ]),
    }
}

pub fn skill_trees() -> SkillTrees {
    let mut trees = SkillTrees::new();
    trees.insert("fullstack", "Fullstack JS", fullstack());
    trees.insert("python-ds", "Python Data Science", python_ds());
    trees.insert("mobile", "Mobile Flutter", mobile());
    trees
}
