//! Table integration tests.

use nimzero::{
    BetAction, BetError, BetOutcome, BettingPhase, Card, DealError, Deck, GameState, JoinError,
    PlayError, PlayOutcome, RoundError, RoundResult, SessionEnd, SettleError, Settlement, Table,
    TableOptions,
};

fn card(value: u8) -> Card {
    Card::new(value).unwrap()
}

fn deck(draws: &[u8]) -> Deck {
    let cards: Vec<Card> = draws.iter().map(|&value| card(value)).collect();
    Deck::from_draw_order(&cards)
}

fn seated(options: TableOptions, players: usize) -> Table {
    let mut table = Table::new(options, 1);
    for i in 0..players {
        table.add_player(format!("Player {}", i + 1)).unwrap();
    }
    table
}

fn hand_values(table: &Table, index: usize) -> Vec<u8> {
    table
        .player(index)
        .unwrap()
        .hand()
        .iter()
        .map(|card| card.value())
        .collect()
}

fn round_over(outcome: PlayOutcome) -> RoundResult {
    match outcome {
        PlayOutcome::RoundOver(result) => result,
        PlayOutcome::Played { .. } => panic!("expected the round to end"),
    }
}

#[test]
fn add_player_errors() {
    let mut table = seated(TableOptions::default(), 2);

    assert_eq!(
        table.add_player("Player 1").unwrap_err(),
        JoinError::DuplicateName
    );

    for i in 3..=10 {
        table.add_player(format!("Player {i}")).unwrap();
    }
    assert_eq!(
        table.add_player("Player 11").unwrap_err(),
        JoinError::TableFull
    );

    let mut table = seated(TableOptions::default(), 2);
    table.start_round().unwrap();
    assert_eq!(
        table.add_player("Late").unwrap_err(),
        JoinError::InvalidState
    );
}

#[test]
fn start_round_deals_round_robin() {
    let options = TableOptions::default().with_hand_size(2);
    let mut table = seated(options, 2);

    table
        .start_round_with_deck(deck(&[3, 1, 2, 0, 3]))
        .unwrap();

    assert_eq!(table.state(), GameState::Betting);
    assert_eq!(table.round(), 1);
    assert_eq!(hand_values(&table, 0), vec![3, 2]);
    assert_eq!(hand_values(&table, 1), vec![1, 0]);
    assert_eq!(table.cards_remaining(), 1);
    assert_eq!(table.current_index(), 0);
    assert_eq!(table.total(), 0);
}

#[test]
fn shuffled_round_deals_full_hands() {
    let mut table = seated(TableOptions::default(), 3);
    table.start_round().unwrap();

    for player in table.players() {
        assert_eq!(player.hand().len(), 4);
        assert_eq!(player.chips(), 100);
        assert_eq!(player.bet(), 0);
    }
    assert_eq!(table.cards_remaining(), 40 - 12);
}

#[test]
fn deal_errors() {
    let mut table = seated(TableOptions::default(), 1);
    assert_eq!(
        table.start_round().unwrap_err(),
        RoundError::Deal(DealError::NotEnoughPlayers)
    );

    let mut table = seated(TableOptions::default(), 2);
    assert_eq!(table.deal(4).unwrap_err(), DealError::InvalidState);

    assert_eq!(
        table.start_round_with_deck(deck(&[0, 1, 2])).unwrap_err(),
        RoundError::Deal(DealError::NotEnoughCards)
    );

    table.reset();
    assert_eq!(table.deal(0).unwrap_err(), DealError::EmptyHand);
    assert_eq!(table.deal(21).unwrap_err(), DealError::NotEnoughCards);
    table.deal(4).unwrap();
    assert_eq!(table.state(), GameState::Betting);
}

#[test]
fn bets_settled_needs_an_opening_bet() {
    let mut table = seated(TableOptions::default(), 2);
    table.start_round().unwrap();

    assert!(!table.bets_settled(None));
    // Nobody has bet, so everyone already matches zero.
    assert!(table.bets_settled(Some(0)));
    assert!(!table.bets_settled(Some(1)));
}

#[test]
fn bets_above_the_given_highest_bet_do_not_settle() {
    let mut table = seated(TableOptions::default(), 2);
    table.start_round().unwrap();
    table.open_bet(10).unwrap();
    assert_eq!(table.act(BetAction::Call).unwrap(), BetOutcome::Settled);

    assert!(table.players().iter().all(|player| player.bet() == 10));
    assert!(!table.bets_settled(Some(5)));
    assert!(table.bets_settled(Some(10)));
}

#[test]
fn opening_bet_then_call_settles() {
    let mut table = seated(TableOptions::default(), 3);
    table.start_round().unwrap();

    assert_eq!(table.act(BetAction::Call).unwrap_err(), BetError::NotOpened);
    assert_eq!(
        table.open_bet(101).unwrap_err(),
        BetError::InsufficientChips
    );

    assert_eq!(table.open_bet(10).unwrap(), BetOutcome::Continue);
    assert_eq!(
        table.betting_phase(),
        BettingPhase::AwaitingCalls { highest_bet: 10 }
    );
    assert_eq!(table.current_index(), 1);
    assert_eq!(table.open_bet(5).unwrap_err(), BetError::AlreadyOpened);

    assert_eq!(table.act(BetAction::Call).unwrap(), BetOutcome::Continue);
    assert!(!table.bets_settled(table.highest_bet()));
    assert_eq!(table.act(BetAction::Call).unwrap(), BetOutcome::Settled);

    assert_eq!(table.state(), GameState::Playing);
    assert_eq!(table.betting_phase(), BettingPhase::Settled { highest_bet: 10 });
    assert_eq!(table.current_index(), 0);
    assert!(table.players().iter().all(|player| player.bet() == 10));
    assert_eq!(table.act(BetAction::Call).unwrap_err(), BetError::InvalidState);
}

#[test]
fn zero_opening_bet_settles_at_once() {
    let mut table = seated(TableOptions::default(), 2);
    table.start_round().unwrap();

    assert_eq!(table.open_bet(0).unwrap(), BetOutcome::Settled);
    assert_eq!(table.state(), GameState::Playing);
}

#[test]
fn raise_validation_and_recall() {
    let mut table = seated(TableOptions::default(), 2);
    table.start_round().unwrap();
    table.open_bet(20).unwrap();

    assert_eq!(
        table.act(BetAction::Raise(10)).unwrap_err(),
        BetError::BelowHighestBet
    );
    assert_eq!(
        table.act(BetAction::Raise(200)).unwrap_err(),
        BetError::InsufficientChips
    );
    assert_eq!(table.current_index(), 1);

    assert_eq!(table.act(BetAction::Raise(30)).unwrap(), BetOutcome::Continue);
    assert_eq!(table.highest_bet(), Some(30));
    assert_eq!(table.current_index(), 0);

    // The opener has to answer the raise.
    assert_eq!(table.act(BetAction::Call).unwrap(), BetOutcome::Settled);
    assert_eq!(table.player(0).unwrap().bet(), 30);
}

#[test]
fn raise_equal_to_highest_bet_is_accepted() {
    let mut table = seated(TableOptions::default(), 2);
    table.start_round().unwrap();
    table.open_bet(20).unwrap();

    assert_eq!(table.act(BetAction::Raise(20)).unwrap(), BetOutcome::Settled);
}

#[test]
fn call_with_every_chip_goes_all_in() {
    let mut table = seated(TableOptions::default(), 2);
    table.start_round().unwrap();
    table.open_bet(50).unwrap();
    table.act(BetAction::Raise(100)).unwrap();

    assert_eq!(table.act(BetAction::Call).unwrap(), BetOutcome::Settled);
    let opener = table.player(0).unwrap();
    assert_eq!(opener.bet(), 100);
    assert!(opener.is_all_in());
    assert!(!table.player(1).unwrap().is_all_in());
}

#[test]
fn fold_is_accepted_but_does_nothing() {
    let mut table = seated(TableOptions::default(), 2);
    table.start_round().unwrap();
    table.open_bet(10).unwrap();

    assert_eq!(
        table.act(BetAction::Fold).unwrap(),
        BetOutcome::FoldUnsupported
    );
    assert_eq!(table.current_index(), 1);
    assert_eq!(table.player(1).unwrap().bet(), 0);
    assert_eq!(table.state(), GameState::Betting);

    assert_eq!(table.act(BetAction::Call).unwrap(), BetOutcome::Settled);
}

#[test]
fn play_rejects_missing_value_without_changes() {
    let options = TableOptions::default().with_hand_size(2);
    let mut table = seated(options, 2);
    table.start_round_with_deck(deck(&[3, 1, 3, 2])).unwrap();

    assert_eq!(table.play(3).unwrap_err(), PlayError::InvalidState);

    table.open_bet(10).unwrap();
    table.act(BetAction::Call).unwrap();

    assert_eq!(table.play(0).unwrap_err(), PlayError::NotInHand(0));
    assert_eq!(hand_values(&table, 0), vec![3, 3]);
    assert_eq!(table.total(), 0);
    assert_eq!(table.current_index(), 0);
}

#[test]
fn total_of_nine_does_not_bust() {
    let options = TableOptions::default().with_hand_size(2);
    let mut table = seated(options, 2);
    table.start_round_with_deck(deck(&[3, 1, 3, 2])).unwrap();
    table.open_bet(10).unwrap();
    table.act(BetAction::Call).unwrap();

    assert_eq!(
        table.play(3).unwrap(),
        PlayOutcome::Played {
            card: card(3),
            total: 3
        }
    );
    assert_eq!(table.current_index(), 1);
    assert_eq!(
        table.play(2).unwrap(),
        PlayOutcome::Played {
            card: card(2),
            total: 5
        }
    );
    assert_eq!(
        table.play(3).unwrap(),
        PlayOutcome::Played {
            card: card(3),
            total: 8
        }
    );

    // Every hand is now empty at a total of exactly nine.
    let result = round_over(table.play(1).unwrap());
    assert_eq!(result.total, 9);
    assert_eq!(result.settlement, None);
    assert_eq!(result.chips, vec![100, 100]);
    assert_eq!(result.session_end, None);
    assert_eq!(table.state(), GameState::RoundOver);
    assert!(table.players().iter().all(|player| player.bet() == 0));
}

#[test]
fn total_of_ten_busts_and_settles() {
    let options = TableOptions::default().with_hand_size(2);
    let mut table = seated(options, 2);
    table.start_round_with_deck(deck(&[3, 2, 3, 2])).unwrap();
    table.open_bet(10).unwrap();
    table.act(BetAction::Call).unwrap();

    table.play(3).unwrap();
    table.play(2).unwrap();
    table.play(3).unwrap();
    let result = round_over(table.play(2).unwrap());

    assert_eq!(result.round, 1);
    assert_eq!(result.total, 10);
    assert_eq!(
        result.settlement,
        Some(Settlement {
            loser: 1,
            amount: 10,
            share: 10,
            forfeited: 0,
        })
    );
    assert_eq!(result.chips, vec![110, 90]);
    assert_eq!(table.player(1).unwrap().bet(), 0);
    assert_eq!(table.state(), GameState::RoundOver);
}

#[test]
fn empty_hands_are_skipped_during_play() {
    let options = TableOptions::default().with_hand_size(2);
    let mut table = seated(options, 2);
    table.start_round_with_deck(deck(&[0, 1, 0, 1])).unwrap();
    table.open_bet(0).unwrap();

    table.play(0).unwrap();
    table.play(1).unwrap();
    table.play(0).unwrap();
    assert_eq!(table.current_index(), 1);

    let result = round_over(table.play(1).unwrap());
    assert_eq!(result.total, 2);
    assert_eq!(result.settlement, None);
}

#[test]
fn settlement_splits_evenly_between_two_winners() {
    let mut table = seated(TableOptions::default(), 3);
    table
        .start_round_with_deck(deck(&[3; 12]))
        .unwrap();
    table.open_bet(10).unwrap();
    table.act(BetAction::Call).unwrap();
    table.act(BetAction::Call).unwrap();

    table.play(3).unwrap();
    table.play(3).unwrap();
    table.play(3).unwrap();
    let result = round_over(table.play(3).unwrap());

    assert_eq!(
        result.settlement,
        Some(Settlement {
            loser: 0,
            amount: 10,
            share: 5,
            forfeited: 0,
        })
    );
    assert_eq!(result.chips, vec![90, 105, 105]);
    assert_eq!(result.chips.iter().sum::<u32>(), 300);
}

#[test]
fn settlement_rounding_loses_the_remainder() {
    let mut table = seated(TableOptions::default(), 4);
    table
        .start_round_with_deck(deck(&[3; 16]))
        .unwrap();
    table.open_bet(10).unwrap();
    for _ in 0..3 {
        table.act(BetAction::Call).unwrap();
    }

    table.play(3).unwrap();
    table.play(3).unwrap();
    table.play(3).unwrap();
    let result = round_over(table.play(3).unwrap());

    assert_eq!(
        result.settlement,
        Some(Settlement {
            loser: 3,
            amount: 10,
            share: 3,
            forfeited: 1,
        })
    );
    assert_eq!(result.chips, vec![103, 103, 103, 90]);
    assert_eq!(result.chips.iter().sum::<u32>(), 399);
}

#[test]
fn settle_bets_directly() {
    let mut table = seated(TableOptions::default(), 3);
    table.start_round().unwrap();
    table.open_bet(7).unwrap();
    table.act(BetAction::Call).unwrap();
    table.act(BetAction::Call).unwrap();

    assert_eq!(
        table.settle_bets(5).unwrap_err(),
        SettleError::PlayerNotFound
    );

    let settlement = table.settle_bets(1).unwrap();
    assert_eq!(settlement.share, 3);
    assert_eq!(settlement.forfeited, 1);

    let chips: Vec<u32> = table.players().iter().map(|player| player.chips()).collect();
    assert_eq!(chips, vec![103, 93, 103]);
    assert!(
        table
            .players()
            .iter()
            .all(|player| player.bet() == 0 && !player.is_all_in())
    );
}

#[test]
fn short_stack_call_goes_all_in_next_round() {
    let options = TableOptions::default().with_hand_size(2);
    let mut table = seated(options, 2);

    table.start_round_with_deck(deck(&[3, 2, 3, 2])).unwrap();
    table.open_bet(10).unwrap();
    table.act(BetAction::Call).unwrap();
    for value in [3, 2, 3, 2] {
        table.play(value).unwrap();
    }
    assert_eq!(table.player(1).unwrap().chips(), 90);

    table.start_round().unwrap();
    assert_eq!(table.round(), 2);
    assert!(table.players().iter().all(|player| player.bet() == 0));

    table.open_bet(100).unwrap();
    assert_eq!(table.act(BetAction::Call).unwrap(), BetOutcome::Settled);

    let short = table.player(1).unwrap();
    assert_eq!(short.bet(), 90);
    assert!(short.is_all_in());
    assert!(table.bets_settled(Some(100)));
}

#[test]
fn round_limit_ends_the_session() {
    let options = TableOptions::default().with_hand_size(2).with_rounds(1);
    let mut table = seated(options, 2);
    table.start_round_with_deck(deck(&[3, 2, 3, 2])).unwrap();
    table.open_bet(10).unwrap();
    table.act(BetAction::Call).unwrap();

    table.play(3).unwrap();
    table.play(2).unwrap();
    table.play(3).unwrap();
    let result = round_over(table.play(2).unwrap());

    assert_eq!(result.session_end, Some(SessionEnd::RoundLimit));
    assert!(table.is_session_over());
    assert_eq!(table.start_round().unwrap_err(), RoundError::SessionOver);
}

#[test]
fn failed_deal_does_not_use_up_a_round() {
    let mut table = seated(TableOptions::default(), 2);

    assert_eq!(
        table.start_round_with_deck(deck(&[0, 1, 2])).unwrap_err(),
        RoundError::Deal(DealError::NotEnoughCards)
    );
    assert_eq!(table.round(), 0);
    assert_eq!(table.state(), GameState::WaitingForPlayers);

    table.start_round().unwrap();
    assert_eq!(table.round(), 1);
    assert_eq!(table.state(), GameState::Betting);
}

#[test]
fn reset_then_deal_counts_towards_the_round_limit() {
    let options = TableOptions::default().with_hand_size(2).with_rounds(1);
    let mut table = seated(options, 2);
    table.reset_with_deck(deck(&[3, 2, 3, 2]));
    table.deal(2).unwrap();
    assert_eq!(table.round(), 1);

    table.open_bet(10).unwrap();
    table.act(BetAction::Call).unwrap();
    table.play(3).unwrap();
    table.play(2).unwrap();
    table.play(3).unwrap();
    let result = round_over(table.play(2).unwrap());

    assert_eq!(result.round, 1);
    assert_eq!(result.settlement.unwrap().loser, 1);
    assert_eq!(result.session_end, Some(SessionEnd::RoundLimit));
    assert!(table.is_session_over());
}

#[test]
fn bankrupt_player_ends_the_session() {
    let options = TableOptions::default()
        .with_hand_size(2)
        .with_starting_chips(10);
    let mut table = seated(options, 2);
    table.start_round_with_deck(deck(&[3, 3, 3, 3])).unwrap();
    table.open_bet(10).unwrap();
    table.act(BetAction::Call).unwrap();

    table.play(3).unwrap();
    table.play(3).unwrap();
    table.play(3).unwrap();
    let result = round_over(table.play(3).unwrap());

    assert_eq!(result.chips, vec![20, 0]);
    assert_eq!(
        result.session_end,
        Some(SessionEnd::Bankrupt { player: 1 })
    );
    assert_eq!(table.state(), GameState::SessionOver);

    let standings: Vec<&str> = table.standings().iter().map(|player| player.name()).collect();
    assert_eq!(standings, vec!["Player 1", "Player 2"]);
}

#[test]
fn start_round_rejected_mid_round() {
    let mut table = seated(TableOptions::default(), 2);
    table.start_round().unwrap();
    assert_eq!(table.start_round().unwrap_err(), RoundError::InvalidState);
}

#[test]
fn next_player_wraps() {
    let mut table = seated(TableOptions::default(), 3);
    assert_eq!(table.current_player().unwrap().name(), "Player 1");

    table.next_player();
    table.next_player();
    assert_eq!(table.current_player().unwrap().name(), "Player 3");

    table.next_player();
    assert_eq!(table.current_index(), 0);
}

#[test]
fn same_seed_deals_same_hands() {
    let mut a = seated(TableOptions::default(), 2);
    let mut b = seated(TableOptions::default(), 2);
    a.start_round().unwrap();
    b.start_round().unwrap();

    assert_eq!(a.players(), b.players());
}
