/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! The printed menu, category by category.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub name: &'static str,
    /// Price in FCFA.
    pub price: u32,
    pub description: &'static str,
    /// Qualifier printed above the price, e.g. "à partir de".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

impl MenuItem {
    pub fn slug(&self) -> String {
        slugify(self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryImages {
    pub main: &'static str,
    pub secondary: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuCategory {
    pub name: &'static str,
    pub images: CategoryImages,
    pub items: &'static [MenuItem],
}

impl MenuCategory {
    pub fn slug(&self) -> String {
        slugify(self.name)
    }

    /// Id of the section element rendering this category.
    pub fn anchor_id(&self) -> String {
        format!("category-{}", self.slug())
    }

    /// Cheapest and most expensive item, `None` for an empty category.
    pub fn price_range(&self) -> Option<(u32, u32)> {
        let min = self.items.iter().map(|item| item.price).min()?;
        let max = self.items.iter().map(|item| item.price).max()?;
        Some((min, max))
    }
}

/// A dish featured on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuHighlight {
    pub name: &'static str,
    pub price: u32,
    pub category: &'static str,
    pub image: &'static str,
}

/// Lowercases `text` and collapses every whitespace run into a single `-`.
///
/// Punctuation and accents are kept as-is, so "Boissons & Cocktails"
/// becomes `boissons-&-cocktails`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut in_whitespace = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
                in_whitespace = true;
            }
        } else {
            slug.extend(ch.to_lowercase());
            in_whitespace = false;
        }
    }
    slug
}

pub fn find_category(slug: &str) -> Option<&'static MenuCategory> {
    MENU.iter().find(|category| category.slug() == slug)
}

const fn item(name: &'static str, price: u32, description: &'static str) -> MenuItem {
    MenuItem {
        name,
        price,
        description,
        note: None,
    }
}

pub static MENU_HIGHLIGHTS: &[MenuHighlight] = &[
    MenuHighlight {
        name: "Filet de Bœuf",
        price: 12000,
        category: "Plats",
        image: "https://images.unsplash.com/photo-1544025162-d76694265947?w=800",
    },
    MenuHighlight {
        name: "Fondant au Chocolat",
        price: 4500,
        category: "Desserts",
        image: "https://images.unsplash.com/photo-1559339352-11d035aa65de?w=800",
    },
    MenuHighlight {
        name: "Cocktails Signatures",
        price: 5000,
        category: "Bar",
        image: "https://images.unsplash.com/photo-1514362545857-3bc16c4c7d1b?w=800",
    },
];

pub static MENU: &[MenuCategory] = &[
    MenuCategory {
        name: "Salades",
        images: CategoryImages {
            main: "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?w=800",
            secondary: "https://images.unsplash.com/photo-1540420773420-3366772f4999?w=400",
        },
        items: &[
            item("Salade MIMS", 6000, "Notre signature avec poulet grillé, avocat, tomates cerises et vinaigrette maison"),
            item("Salade César", 5500, "Laitue romaine, croûtons, parmesan et sauce César crémeuse"),
            item("Salade Avocat", 5000, "Avocat frais, tomates, oignons rouges et citron vert"),
            item("Salade Poulet", 6000, "Poulet grillé mariné sur lit de verdure fraîche"),
            item("Salade Thon", 5500, "Thon mi-cuit, haricots verts, œuf et olives noires"),
        ],
    },
    MenuCategory {
        name: "Burgers",
        images: CategoryImages {
            main: "https://images.unsplash.com/photo-1568901346375-23c9450c58cd?w=800",
            secondary: "https://images.unsplash.com/photo-1550547660-d9450f859349?w=400",
        },
        items: &[
            item("Classic Burger", 6000, "Bœuf 150g, salade, tomate, oignon et sauce maison"),
            item("Cheeseburger", 6500, "Bœuf 150g avec cheddar fondant et pickles"),
            item("Chicken Burger", 6000, "Filet de poulet pané, salade et mayonnaise"),
            item("Crispy Chicken Burger", 6500, "Poulet croustillant, coleslaw et sauce épicée"),
            item("Veggie Burger", 5500, "Galette de légumes, avocat et sauce tahini"),
        ],
    },
    MenuCategory {
        name: "Sandwichs",
        images: CategoryImages {
            main: "https://images.unsplash.com/photo-1528735602780-2552fd46c7af?w=800",
            secondary: "https://images.unsplash.com/photo-1554433607-66b5efe9d304?w=400",
        },
        items: &[
            item("Sandwich Poulet", 4500, "Poulet grillé, crudités et sauce cocktail"),
            item("Sandwich Steak", 5000, "Emincé de bœuf, oignons caramélisés et moutarde"),
            item("Sandwich Thon", 4500, "Thon, mayonnaise légère et salade croquante"),
            item("Club Sandwich", 5500, "Triple étage avec poulet, bacon, œuf et crudités"),
        ],
    },
    MenuCategory {
        name: "Pâtes",
        images: CategoryImages {
            main: "https://images.unsplash.com/photo-1621996346565-e3dbc646d9a9?w=800",
            secondary: "https://images.unsplash.com/photo-1563379926898-05f4575a45d8?w=400",
        },
        items: &[
            item("Spaghetti Bolognaise", 7000, "Sauce tomate mijotée à la viande hachée"),
            item("Spaghetti Carbonara", 7500, "Crème, lardons, parmesan et jaune d'œuf"),
            item("Penne Poulet", 7500, "Poulet sauté, crème et champignons"),
            item("Penne Crème Champignons", 7000, "Champignons de Paris, crème fraîche et persil"),
            item("Pâtes Fruits de Mer", 9000, "Crevettes, moules, calamars et sauce tomate"),
        ],
    },
    MenuCategory {
        name: "Pizzas",
        images: CategoryImages {
            main: "https://images.unsplash.com/photo-1574071318508-1cdbab80d002?w=800",
            secondary: "https://images.unsplash.com/photo-1565299624946-b28f40a0ae38?w=400",
        },
        items: &[
            item("Margherita", 6500, "Tomate, mozzarella et basilic frais"),
            item("Reine", 7500, "Jambon, champignons et mozzarella"),
            item("Poulet", 7500, "Poulet grillé, poivrons et oignons"),
            item("Viande Hachée", 8000, "Bœuf haché épicé, oignons et fromage"),
            item("Fruits de Mer", 9000, "Crevettes, moules et sauce tomate"),
            item("Végétarienne", 7000, "Légumes grillés, olives et mozzarella"),
        ],
    },
    MenuCategory {
        name: "Plats",
        images: CategoryImages {
            main: "https://images.unsplash.com/photo-1544025162-d76694265947?w=800",
            secondary: "https://images.unsplash.com/photo-1432139555190-58524dae6a55?w=400",
        },
        items: &[
            item("Filet de Bœuf", 12000, "Filet tendre 200g, sauce au poivre et légumes grillés"),
            item("Entrecôte", 11000, "Entrecôte 250g grillée à votre cuisson"),
            item("Poulet Grillé", 7500, "Demi-poulet mariné aux herbes"),
            item("Escalope de Poulet", 8000, "Escalope panée ou grillée, au choix"),
            item("Brochettes", 8000, "Brochettes mixtes bœuf et poulet"),
            item("Poisson Grillé", 9000, "Poisson du jour grillé, sauce citronnée"),
        ],
    },
    MenuCategory {
        name: "Omelettes",
        images: CategoryImages {
            main: "https://images.unsplash.com/photo-1525351484163-7529414344d8?w=800",
            secondary: "https://images.unsplash.com/photo-1510693206972-df098062cb71?w=400",
        },
        items: &[
            item("Omelette Nature", 3000, "Omelette classique aux herbes fraîches"),
            item("Omelette Fromage", 3500, "Garnie de fromage fondant"),
            item("Omelette Champignons", 3500, "Champignons de Paris sautés"),
            item("Omelette Mixte", 4000, "Fromage, champignons et fines herbes"),
        ],
    },
    MenuCategory {
        name: "Desserts",
        images: CategoryImages {
            main: "https://images.unsplash.com/photo-1551024506-0bccd828d307?w=800",
            secondary: "https://images.unsplash.com/photo-1563805042-7684c019e1cb?w=400",
        },
        items: &[
            item("Crêpe Chocolat", 3500, "Crêpe fine nappée de chocolat chaud"),
            item("Crêpe Banane", 3500, "Crêpe avec banane fraîche et caramel"),
            item("Fondant au Chocolat", 4500, "Cœur coulant au chocolat noir, glace vanille"),
            item("Glaces", 3000, "2 boules au choix: vanille, chocolat, fraise"),
        ],
    },
    MenuCategory {
        name: "Boissons & Cocktails",
        images: CategoryImages {
            main: "https://images.unsplash.com/photo-1514362545857-3bc16c4c7d1b?w=800",
            secondary: "https://images.unsplash.com/photo-1536935338788-846bb9981813?w=400",
        },
        items: &[
            MenuItem {
                name: "Cocktails classiques & signatures",
                price: 5000,
                description: "Mojito, Margarita, Cosmopolitan et créations maison",
                note: Some("à partir de"),
            },
            item("Jus naturels", 3000, "Orange, ananas, mangue pressés à la minute"),
            item("Sodas", 2000, "Coca-Cola, Fanta, Sprite, Schweppes"),
            item("Eau minérale", 1500, "Plate ou gazeuse 50cl"),
            item("Boissons chaudes", 2500, "Café, thé, cappuccino, chocolat chaud"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slugify_collapses_whitespace_and_lowercases() {
        assert_eq!(slugify("Salade MIMS"), "salade-mims");
        assert_eq!(slugify("Boissons & Cocktails"), "boissons-&-cocktails");
        assert_eq!(slugify("Pâtes"), "pâtes");
        assert_eq!(slugify("Ngor  \t Virage"), "ngor-virage");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn categories_keep_printed_order() {
        let names: Vec<_> = MENU.iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            [
                "Salades",
                "Burgers",
                "Sandwichs",
                "Pâtes",
                "Pizzas",
                "Plats",
                "Omelettes",
                "Desserts",
                "Boissons & Cocktails",
            ]
        );
    }

    #[test]
    fn every_category_is_complete() {
        let mut slugs = HashSet::new();
        for category in MENU {
            assert!(!category.items.is_empty(), "{} has no items", category.name);
            assert!(!category.images.main.is_empty());
            assert!(!category.images.secondary.is_empty());
            assert!(slugs.insert(category.slug()), "duplicate {}", category.name);
            for item in category.items {
                assert!(item.price > 0, "{} has no price", item.name);
                assert!(!item.description.is_empty());
            }
        }
    }

    #[test]
    fn only_cocktails_carry_a_note() {
        let noted: Vec<_> = MENU
            .iter()
            .flat_map(|c| c.items.iter())
            .filter(|item| item.note.is_some())
            .collect();
        assert_eq!(noted.len(), 1);
        assert_eq!(noted[0].name, "Cocktails classiques & signatures");
        assert_eq!(noted[0].note, Some("à partir de"));
    }

    #[test]
    fn anchor_ids_and_lookup() {
        let drinks = find_category("boissons-&-cocktails").expect("drinks category");
        assert_eq!(drinks.anchor_id(), "category-boissons-&-cocktails");
        assert!(find_category("sushi").is_none());
    }

    #[test]
    fn item_slugs_keep_accents() {
        let dish = item("Filet de Bœuf", 12000, "");
        assert_eq!(dish.slug(), "filet-de-bœuf");
    }

    #[test]
    fn price_range_spans_the_category() {
        let plats = find_category("plats").unwrap();
        assert_eq!(plats.price_range(), Some((7500, 12000)));

        let empty = MenuCategory {
            name: "Vide",
            images: CategoryImages {
                main: "",
                secondary: "",
            },
            items: &[],
        };
        assert_eq!(empty.price_range(), None);
    }

    #[test]
    fn highlights_match_the_menu() {
        let filet = MENU_HIGHLIGHTS[0];
        let listed = find_category("plats")
            .unwrap()
            .items
            .iter()
            .find(|item| item.name == filet.name)
            .unwrap();
        assert_eq!(listed.price, filet.price);
    }

    #[test]
    fn catalog_serializes_without_empty_notes() {
        let json = serde_json::to_value(&MENU[0].items[0]).unwrap();
        assert_eq!(json["name"], "Salade MIMS");
        assert!(json.get("note").is_none());
    }
}
