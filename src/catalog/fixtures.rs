//! The studio's published projects.

use crate::models::{Project, ProjectCategory};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Every project shown on the site, in gallery order.
pub fn builtin_projects() -> Vec<Project> {
    let mut kitchen = Project::new(
        1,
        "cozinha-moderna",
        "Cozinha Moderna",
        ProjectCategory::Cozinhas,
        "/images/hero-modern-kitchen.jpg",
        "Cozinha integrada com móveis planejados em madeira natural",
    );
    kitchen.images = strings(&[
        "/images/hero-modern-kitchen.jpg",
        "/images/living-room-shelving.jpg",
        "/images/bedroom-wardrobe.jpg",
    ]);
    kitchen.location = Some("Palhoça/SC".to_string());
    kitchen.year = Some(2025);
    kitchen.materials = strings(&["MDF amadeirado", "Ferragens soft-close", "Puxador perfil"]);
    kitchen.measures = strings(&["Aéreos alinhados", "Nicho micro-ondas", "Bancada funcional"]);
    kitchen.tags = strings(&["Moderno", "Funcional"]);
    kitchen.featured = true;

    let mut wardrobe = Project::new(
        2,
        "guarda-roupa-elegante",
        "Guarda-Roupa Elegante",
        ProjectCategory::Quartos,
        "/images/bedroom-wardrobe.jpg",
        "Guarda-roupa personalizado com design minimalista",
    );
    wardrobe.year = Some(2024);

    vec![
        kitchen,
        wardrobe,
        Project::new(
            3,
            "estante-sala",
            "Estante Sala",
            ProjectCategory::Salas,
            "/images/living-room-shelving.jpg",
            "Estante de parede com design contemporâneo",
        ),
        Project::new(
            4,
            "home-office",
            "Home Office",
            ProjectCategory::Escritorios,
            "/images/home-office-desk.jpg",
            "Espaço de trabalho funcional e elegante",
        ),
        Project::new(
            5,
            "banheiro-luxo",
            "Banheiro Luxo",
            ProjectCategory::Banheiros,
            "/images/bathroom-vanity.jpg",
            "Móvel de banheiro com acabamento premium",
        ),
    ]
}
