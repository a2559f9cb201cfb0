//! CLI table example: deal a hand and legally grow table collections.

#![allow(clippy::missing_docs_in_private_items)]

use std::time::{SystemTime, UNIX_EPOCH};

use rmrs::{
    AddError, Collection, DeckOptions, DrawPile, Hand, Rank, SameRankCollection,
    SequenceCollection, Suit, Tile,
};

fn describe(tile: &Tile) -> String {
    match tile {
        Tile::Normal(normal) => format!("{:?} of {:?}s", normal.rank(), normal.suit()),
        Tile::Wildcard(_) => "Wildcard".to_string(),
    }
}

fn report(label: &str, outcome: Result<bool, AddError>) {
    match outcome {
        Ok(true) => println!("{label}: accepted."),
        Ok(false) => println!("{label}: rejected, collection unchanged."),
        Err(err) => println!("{label}: error ({err})."),
    }
}

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut pile = DrawPile::standard(DeckOptions::default(), seed);
    println!("Shuffled a pile of {} tiles.", pile.len());

    let mut hand = Hand::new();
    for _ in 0..14 {
        if let Some(tile) = pile.draw() {
            hand.add(tile);
        }
    }

    println!("Drew a hand worth {} points:", hand.score());
    for tile in hand.tiles() {
        println!("  {}", describe(tile));
    }

    // A run on the table: Queen, King, and the ace wrapping past the king.
    let run = SequenceCollection::new(
        vec![
            Tile::normal(Suit::Spade, Rank::Queen),
            Tile::normal(Suit::Spade, Rank::King),
            Tile::normal(Suit::Spade, Rank::Ace),
        ],
        Suit::Spade,
    )
    .expect("queen-king-ace is a valid run");
    let mut run = Collection::from(run);

    println!("\nRun on the table: Queen, King, Ace of Spades ({} points).", run.score());
    report(
        "Jack of Spades at the front",
        run.add_front(Tile::normal(Suit::Spade, Rank::Jack)),
    );
    report(
        "Two of Spades after the wrapped Ace",
        run.add_back(Tile::normal(Suit::Spade, Rank::Two)),
    );
    report("Wildcard at the back", run.add_back(Tile::wildcard()));
    println!("Run is now {} tiles, {} points.", run.len(), run.score());

    // A set on the table: three Sevens across suits.
    let set = SameRankCollection::new(
        vec![
            Tile::normal(Suit::Diamond, Rank::Seven),
            Tile::normal(Suit::Club, Rank::Seven),
            Tile::normal(Suit::Heart, Rank::Seven),
        ],
        Rank::Seven,
    )
    .expect("three sevens are a valid set");
    let mut set = Collection::from(set);

    println!("\nSet on the table: three Sevens ({} points).", set.score());
    report(
        "Seven of Spades",
        set.add_back(Tile::normal(Suit::Spade, Rank::Seven)),
    );
    report(
        "Eight of Spades",
        set.add_front(Tile::normal(Suit::Spade, Rank::Eight)),
    );
    println!("Set is now {} tiles, {} points.", set.len(), set.score());
}
