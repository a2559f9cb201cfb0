//! Collection integration tests.

use rmrs::{
    AddError, BuildError, Collection, DECK_SIZE, DeckOptions, DrawPile, Hand, NormalTile, Rank,
    RUN_MAX_LEN, SET_MAX_LEN, SameRankCollection, SequenceCollection, Suit, Tile, WILDCARD_SCORE,
    tile_score,
};

fn tile(suit: Suit, rank: Rank) -> Tile {
    Tile::normal(suit, rank)
}

fn spade_run(ranks: &[Rank]) -> Vec<Tile> {
    ranks.iter().map(|&rank| tile(Suit::Spade, rank)).collect()
}

fn face(tile: &Tile) -> Option<(Suit, Rank)> {
    match tile {
        Tile::Normal(normal) => Some((normal.suit(), normal.rank())),
        Tile::Wildcard(_) => None,
    }
}

#[test]
fn scoring_table_values() {
    assert_eq!(tile_score(&tile(Suit::Spade, Rank::Ace)), 15);
    assert_eq!(tile_score(&tile(Suit::Heart, Rank::Five)), 5);
    assert_eq!(tile_score(&tile(Suit::Club, Rank::Ten)), 10);
    assert_eq!(tile_score(&tile(Suit::Diamond, Rank::Jack)), 10);
    assert_eq!(tile_score(&tile(Suit::Diamond, Rank::Queen)), 10);
    assert_eq!(tile_score(&tile(Suit::Diamond, Rank::King)), 10);
    assert_eq!(tile_score(&Tile::wildcard()), WILDCARD_SCORE);

    // Method form matches the free function.
    assert_eq!(tile(Suit::Spade, Rank::Two).score(), 2);
    assert_eq!(Tile::wildcard().score(), 20);
}

#[test]
fn tiles_are_distinct_by_identity() {
    let first = tile(Suit::Spade, Rank::Seven);
    let second = tile(Suit::Spade, Rank::Seven);

    assert_ne!(first.id(), second.id());
    assert_ne!(first, second);
    assert_eq!(face(&first), face(&second));
}

#[test]
fn wildcard_stand_in_flag_is_display_only() {
    let marked = NormalTile::new(Suit::Heart, Rank::Six).with_wildcard_stand_in(true);
    assert!(marked.is_wildcard_stand_in());
    assert_eq!(marked.score(), 6);

    // Validation ignores the flag: the tile joins a run like any other.
    let mut run = SequenceCollection::new(
        spade_run(&[Rank::Four, Rank::Five, Rank::Six]),
        Suit::Spade,
    )
    .unwrap();
    let marked_spade =
        Tile::from(NormalTile::new(Suit::Spade, Rank::Seven).with_wildcard_stand_in(true));
    assert_eq!(run.add_back(marked_spade), Ok(true));
}

#[test]
fn run_constructor_validates_initial_tiles() {
    assert!(SequenceCollection::new(
        spade_run(&[Rank::Queen, Rank::King, Rank::Ace]),
        Suit::Spade
    )
    .is_ok());

    // Length 2 is below the bound even with the wraparound pair.
    assert_eq!(
        SequenceCollection::new(spade_run(&[Rank::King, Rank::Ace]), Suit::Spade).unwrap_err(),
        BuildError::InvalidRun
    );

    // King after Two is not contiguous, and this King-Ace is not even adjacent.
    assert_eq!(
        SequenceCollection::new(spade_run(&[Rank::Ace, Rank::Two, Rank::King]), Suit::Spade)
            .unwrap_err(),
        BuildError::InvalidRun
    );

    // Length 15+ is invalid regardless of content.
    let fifteen: Vec<Tile> = (0..15).map(|_| tile(Suit::Spade, Rank::Seven)).collect();
    assert_eq!(
        SequenceCollection::new(fifteen, Suit::Spade).unwrap_err(),
        BuildError::InvalidRun
    );

    // Wildcards never enter a collection.
    assert_eq!(
        SequenceCollection::new(
            vec![
                tile(Suit::Spade, Rank::Five),
                tile(Suit::Spade, Rank::Six),
                Tile::wildcard(),
            ],
            Suit::Spade
        )
        .unwrap_err(),
        BuildError::WildcardTile
    );
}

#[test]
fn run_requires_suit_uniformity() {
    assert_eq!(
        SequenceCollection::new(
            vec![
                tile(Suit::Spade, Rank::Five),
                tile(Suit::Spade, Rank::Six),
                tile(Suit::Heart, Rank::Seven),
            ],
            Suit::Spade
        )
        .unwrap_err(),
        BuildError::InvalidRun
    );

    // All tiles must also match the declared suit.
    assert_eq!(
        SequenceCollection::new(
            vec![
                tile(Suit::Heart, Rank::Five),
                tile(Suit::Heart, Rank::Six),
                tile(Suit::Heart, Rank::Seven),
            ],
            Suit::Spade
        )
        .unwrap_err(),
        BuildError::InvalidRun
    );

    let run =
        SequenceCollection::new(spade_run(&[Rank::Five, Rank::Six, Rank::Seven]), Suit::Spade)
            .unwrap();
    assert_eq!(run.can_add_back(&tile(Suit::Heart, Rank::Eight)), Ok(false));
}

#[test]
fn run_wraparound_is_terminal_only() {
    // Queen, King, Ace: contiguous pairs, then King-Ace as the last pair.
    let run = SequenceCollection::new(
        spade_run(&[Rank::Queen, Rank::King, Rank::Ace]),
        Suit::Spade,
    )
    .unwrap();

    // Nothing extends past the wrapped ace; King-Ace would no longer be last.
    assert_eq!(run.can_add_back(&tile(Suit::Spade, Rank::Two)), Ok(false));
    assert_eq!(run.can_add_back(&tile(Suit::Spade, Rank::Ace)), Ok(false));

    // Extending at the front keeps the wrap terminal and stays legal.
    assert_eq!(run.can_add_front(&tile(Suit::Spade, Rank::Jack)), Ok(true));
}

#[test]
fn run_grows_to_fourteen_and_no_further() {
    let all_ranks = spade_run(&[
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ]);
    let mut run = SequenceCollection::new(all_ranks, Suit::Spade).unwrap();

    // A second ace closes the run after the king.
    assert_eq!(run.add_back(tile(Suit::Spade, Rank::Ace)), Ok(true));
    assert_eq!(run.len(), RUN_MAX_LEN);

    // Full runs accept nothing at either end.
    assert_eq!(run.can_add_back(&tile(Suit::Spade, Rank::Two)), Ok(false));
    assert_eq!(run.can_add_front(&tile(Suit::Spade, Rank::King)), Ok(false));
}

#[test]
fn rejected_add_leaves_run_unchanged() {
    let mut run =
        SequenceCollection::new(spade_run(&[Rank::Five, Rank::Six, Rank::Seven]), Suit::Spade)
            .unwrap();
    let before = run.clone();

    let nine = tile(Suit::Spade, Rank::Nine);
    assert_eq!(run.can_add_back(&nine), Ok(false));
    assert_eq!(run.add_back(nine), Ok(false));
    assert_eq!(run, before);

    let three = tile(Suit::Spade, Rank::Three);
    assert_eq!(run.can_add_front(&three), Ok(false));
    assert_eq!(run.add_front(three), Ok(false));
    assert_eq!(run, before);
}

#[test]
fn accepted_add_commits_at_the_right_end() {
    let mut run =
        SequenceCollection::new(spade_run(&[Rank::Five, Rank::Six, Rank::Seven]), Suit::Spade)
            .unwrap();

    let eight = tile(Suit::Spade, Rank::Eight);
    assert_eq!(run.can_add_back(&eight), Ok(true));
    assert_eq!(run.add_back(eight), Ok(true));
    assert_eq!(run.tiles().last().map(NormalTile::rank), Some(Rank::Eight));
    assert_eq!(run.tiles().last().map(NormalTile::id), Some(eight.id()));

    let four = tile(Suit::Spade, Rank::Four);
    assert_eq!(run.add_front(four), Ok(true));
    assert_eq!(run.tiles().first().map(NormalTile::rank), Some(Rank::Four));
    assert_eq!(run.len(), 5);
}

#[test]
fn set_accepts_matching_rank_any_suit() {
    let set = SameRankCollection::new(
        vec![
            tile(Suit::Diamond, Rank::Seven),
            tile(Suit::Club, Rank::Seven),
            tile(Suit::Heart, Rank::Seven),
        ],
        Rank::Seven,
    )
    .unwrap();

    let spade_seven = tile(Suit::Spade, Rank::Seven);
    assert_eq!(set.can_add_front(&spade_seven), Ok(true));
    assert_eq!(set.can_add_back(&spade_seven), Ok(true));

    let eight = tile(Suit::Spade, Rank::Eight);
    assert_eq!(set.can_add_front(&eight), Ok(false));
    assert_eq!(set.can_add_back(&eight), Ok(false));
}

#[test]
fn set_front_and_back_are_equivalent() {
    let base = SameRankCollection::new(
        vec![tile(Suit::Diamond, Rank::Four), tile(Suit::Club, Rank::Four)],
        Rank::Four,
    )
    .unwrap();

    let joining = tile(Suit::Heart, Rank::Four);
    let mut via_front = base.clone();
    let mut via_back = base.clone();

    assert_eq!(via_front.add_front(joining), Ok(true));
    assert_eq!(via_back.add_back(joining), Ok(true));
    assert_eq!(via_front, via_back);
}

#[test]
fn set_membership_is_by_identity() {
    let first_spade = tile(Suit::Spade, Rank::Nine);
    let second_spade = tile(Suit::Spade, Rank::Nine);

    let mut set = SameRankCollection::new(
        vec![first_spade, tile(Suit::Heart, Rank::Nine)],
        Rank::Nine,
    )
    .unwrap();

    // A physically distinct tile with the same face is a new member.
    assert_eq!(set.add_back(second_spade), Ok(true));
    assert_eq!(set.len(), 3);
    assert!(set.contains(second_spade.id()));

    // The same physical tile cannot join twice.
    assert_eq!(set.can_add_back(&second_spade), Ok(false));
    assert_eq!(set.add_back(second_spade), Ok(false));
    assert_eq!(set.len(), 3);
}

#[test]
fn set_is_capped_at_four_tiles() {
    let mut set = SameRankCollection::new(
        vec![
            tile(Suit::Diamond, Rank::King),
            tile(Suit::Club, Rank::King),
            tile(Suit::Heart, Rank::King),
            tile(Suit::Spade, Rank::King),
        ],
        Rank::King,
    )
    .unwrap();
    assert_eq!(set.len(), SET_MAX_LEN);

    let fifth = tile(Suit::Diamond, Rank::King);
    assert_eq!(set.can_add_back(&fifth), Ok(false));
    assert_eq!(set.add_back(fifth), Ok(false));
    assert_eq!(set.len(), SET_MAX_LEN);

    let five_kings: Vec<Tile> = (0..5).map(|_| tile(Suit::Club, Rank::King)).collect();
    assert_eq!(
        SameRankCollection::new(five_kings, Rank::King).unwrap_err(),
        BuildError::InvalidSet
    );
}

#[test]
fn set_constructor_validates_initial_tiles() {
    assert_eq!(
        SameRankCollection::new(
            vec![tile(Suit::Diamond, Rank::Seven), tile(Suit::Club, Rank::Eight)],
            Rank::Seven,
        )
        .unwrap_err(),
        BuildError::InvalidSet
    );

    assert_eq!(
        SameRankCollection::new(
            vec![tile(Suit::Diamond, Rank::Seven), Tile::wildcard()],
            Rank::Seven,
        )
        .unwrap_err(),
        BuildError::WildcardTile
    );
}

#[test]
fn wildcards_are_an_error_not_a_rejection() {
    let mut run =
        SequenceCollection::new(spade_run(&[Rank::Five, Rank::Six, Rank::Seven]), Suit::Spade)
            .unwrap();
    let before_run = run.clone();
    let wildcard = Tile::wildcard();

    assert_eq!(run.can_add_front(&wildcard), Err(AddError::WildcardTile));
    assert_eq!(run.can_add_back(&wildcard), Err(AddError::WildcardTile));
    assert_eq!(run.add_front(wildcard), Err(AddError::WildcardTile));
    assert_eq!(run.add_back(wildcard), Err(AddError::WildcardTile));
    assert_eq!(run, before_run);

    let mut set = SameRankCollection::new(
        vec![tile(Suit::Diamond, Rank::Two), tile(Suit::Club, Rank::Two)],
        Rank::Two,
    )
    .unwrap();
    let before_set = set.clone();

    assert_eq!(set.can_add_front(&wildcard), Err(AddError::WildcardTile));
    assert_eq!(set.add_back(wildcard), Err(AddError::WildcardTile));
    assert_eq!(set, before_set);
}

#[test]
fn collection_enum_delegates_to_variants() {
    let run =
        SequenceCollection::new(spade_run(&[Rank::Ace, Rank::Two, Rank::Three]), Suit::Spade)
            .unwrap();
    let mut collection = Collection::from(run);

    let four = tile(Suit::Spade, Rank::Four);
    assert_eq!(collection.can_add_back(&four), Ok(true));
    assert_eq!(collection.add_back(four), Ok(true));
    assert_eq!(collection.len(), 4);
    assert!(!collection.is_empty());
    // Ace 15 + Two 2 + Three 3 + Four 4.
    assert_eq!(collection.score(), 24);

    let set = SameRankCollection::new(
        vec![
            tile(Suit::Diamond, Rank::King),
            tile(Suit::Club, Rank::King),
            tile(Suit::Heart, Rank::King),
        ],
        Rank::King,
    )
    .unwrap();
    let mut collection = Collection::from(set);
    assert_eq!(collection.score(), 30);
    assert_eq!(collection.add_front(tile(Suit::Spade, Rank::King)), Ok(true));
    assert_eq!(collection.len(), 4);
    assert_eq!(
        collection.can_add_front(&Tile::wildcard()),
        Err(AddError::WildcardTile)
    );
}

#[test]
fn hand_holds_takes_and_scores() {
    let ace = tile(Suit::Spade, Rank::Ace);
    let wildcard = Tile::wildcard();
    let mut hand = Hand::from_tiles(vec![ace, wildcard]);

    assert_eq!(hand.len(), 2);
    assert_eq!(hand.score(), 35);

    let taken = hand.take(ace.id()).unwrap();
    assert_eq!(taken.id(), ace.id());
    assert_eq!(hand.len(), 1);
    assert_eq!(hand.take(ace.id()), None);

    hand.add(tile(Suit::Heart, Rank::Five));
    assert_eq!(hand.score(), 25);
}

#[test]
fn standard_pile_has_full_decks_and_wildcards() {
    let pile = DrawPile::standard(DeckOptions::default(), 9);
    assert_eq!(pile.len(), 2 * DECK_SIZE + 2);

    let mut pile = DrawPile::standard(DeckOptions::default().with_decks(1).with_wildcards(0), 9);
    assert_eq!(pile.len(), DECK_SIZE);

    let mut wildcards = 0;
    let mut normals = 0;
    while let Some(drawn) = pile.draw() {
        if drawn.is_wildcard() {
            wildcards += 1;
        } else {
            normals += 1;
        }
    }
    assert_eq!(wildcards, 0);
    assert_eq!(normals, DECK_SIZE);
    assert!(pile.is_empty());
}

#[test]
fn same_seed_deals_the_same_order() {
    let options = DeckOptions::default().with_decks(1).with_wildcards(2);
    let mut first = DrawPile::standard(options, 42);
    let mut second = DrawPile::standard(options, 42);

    while let Some(tile) = first.draw() {
        let twin = second.draw().unwrap();
        assert_eq!(face(&tile), face(&twin));
    }
    assert!(second.is_empty());
}

#[test]
fn prearranged_pile_draws_from_the_top() {
    let bottom = tile(Suit::Club, Rank::Two);
    let top = tile(Suit::Heart, Rank::Nine);
    let mut pile = DrawPile::from_tiles(vec![bottom, top]);

    assert_eq!(pile.draw().map(|t| t.id()), Some(top.id()));
    assert_eq!(pile.draw().map(|t| t.id()), Some(bottom.id()));
    assert_eq!(pile.draw(), None);
}
