//! Replays a fixed access log through a favorite list and prints the
//! resulting ranking, the way a host application would embed one.

use positional::prelude::*;

fn main() {
    let log = [
        "home", "search", "home", "settings", "search", "home", "profile", "search", "home",
        "about", "profile", "home",
    ];

    let mut favorites = FavoriteList::new();
    for page in log {
        favorites.access(page);
    }

    println!("pages by access count:");
    for (page, count) in favorites.iter() {
        println!("{count:>5}  {page}");
    }

    match favorites.top(3) {
        Ok(top) => {
            let ranking: Vec<_> = top.collect();
            println!("top 3: {ranking:?}");
        }
        Err(err) => eprintln!("top failed: {err}"),
    }
}
