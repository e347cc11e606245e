use holdem_odds::core::{parse_cards, Card};
use holdem_odds::holdem::WinProbabilityCalculator;
use tracing_subscriber::EnvFilter;

/// Run with seven cards (two hole cards then the board) and a player count:
///
/// ```text
/// cargo run --example win_probability -- 9S 8S QS JS 10S 2H 3C 4
/// ```
///
/// Set `RUST_LOG=holdem_odds=debug` to see the enumeration tally.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (cards, player_count) = match args.split_last() {
        Some((players, cards)) if !cards.is_empty() => {
            (parse_cards(&cards.join(" "))?, players.parse::<usize>()?)
        }
        _ => (parse_cards("9S 8S QS JS 10S 2H 3C")?, 4),
    };
    let (hole, board): (&[Card], &[Card]) = cards.split_at(cards.len().min(2));

    println!("=== Texas Hold'em River Win Probability ===\n");
    println!("Hole:    {}", join(hole));
    println!("Board:   {}", join(board));
    println!("Players: {player_count}\n");

    let calc = WinProbabilityCalculator::new(hole, board, player_count)?;
    let (best, score) = calc.my_best();
    println!("Best five: {best} ({score})");

    let tally = calc.calculate();
    println!("Against a single opponent over {} holdings:", tally.total());
    println!("  Wins:   {}", tally.wins);
    println!("  Ties:   {}", tally.ties);
    println!("  Losses: {}", tally.losses);
    println!("  Win %:  {:.2}%", tally.win_percentage());
    println!("  Tie %:  {:.2}%", tally.tie_percentage());

    let probability = tally.win_probability(player_count)?;
    println!("\nProbability of winning: ({:.2}%)", probability * 100.0);
    Ok(())
}

fn join(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
