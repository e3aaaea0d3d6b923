//! CLI command implementations

mod create;
mod genres;
mod library;

pub use create::{create, CreateArgs};
pub use genres::genres;
pub use library::library;

use bookai_core::{Catalog, CatalogView};

fn starting_catalog(empty: bool) -> Catalog {
    if empty {
        Catalog::new()
    } else {
        Catalog::with_samples()
    }
}

/// Print a library view as text
fn print_view(view: &CatalogView) {
    println!("Моя библиотека: {}", view.count_label);
    if view.is_empty() {
        println!();
        println!("Библиотека пуста");
        println!("Создайте свою первую книгу с помощью ИИ");
        return;
    }

    for card in &view.books {
        println!();
        println!("{}", card.title);
        println!("  Жанр:     {} ({})", card.genre_label, card.genre);
        println!("  Описание: {}", card.description);
        println!("  Главы:    {}", card.chapters_label);
        println!("  Создана:  {}", card.created_at_display);
        println!("  Обложка:  {}", card.cover);
        println!("  ID:       {}", card.id);
    }
}
