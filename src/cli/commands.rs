//! Command dispatch and rendering

use std::io::{self, BufRead, Write};

use clap::{Command, CommandFactory};
use clap_complete::{generate, Generator};
use termtree::Tree;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands, HistoryCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::genre;
use crate::domain::{
    metrics, NodeId, QuestionNode, QuestionTree, Session, SessionRecord, Step, TraversalResult,
    TreeStats,
};
use crate::infrastructure::{InfraError, ServiceContainer};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Err(CliError::Usage(
            "no command given, try `cinepath --help`".to_string(),
        ));
    };

    if let Commands::Completion { shell } = command {
        print_completions(*shell, &mut Cli::command());
        return Ok(());
    }

    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);

    if let Commands::Config { command } = command {
        return config_command(command, &settings, cli);
    }

    let container = ServiceContainer::new(settings)?;
    match command {
        Commands::Ask { no_record } => ask(&container, !no_record),
        Commands::Walk { answers, no_record } => walk(&container, answers, !no_record),
        Commands::Stats => stats(&container),
        Commands::Questions => questions(&container),
        Commands::Tree { max_depth } => {
            output::info(&render_tree(container.engine.tree(), *max_depth));
            Ok(())
        }
        Commands::History { command } => history_command(command, &container),
        Commands::Config { .. } | Commands::Completion { .. } => Ok(()),
    }
}

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

/// Parse an answer string such as `"nyyynn"` or `"y, n, 1, 0"`.
pub fn parse_answers(input: &str) -> CliResult<Vec<bool>> {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| match c.to_ascii_lowercase() {
            'y' | 't' | '1' => Ok(true),
            'n' | 'f' | '0' => Ok(false),
            other => Err(CliError::InvalidArgs(format!(
                "unexpected answer '{other}', use y or n"
            ))),
        })
        .collect()
}

#[instrument(level = "debug", skip(container))]
fn ask(container: &ServiceContainer, record: bool) -> CliResult<()> {
    let mut session = container.engine.start_session();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    match run_session(&mut session, &mut stdin.lock(), &mut stdout)? {
        Some(result) => {
            output::action(
                "Session time",
                &format!("{:.1} s", session.session_elapsed().as_secs_f64()),
            );
            finish(container, &result, record)
        }
        None => {
            output::info("Session ended without a recommendation.");
            Ok(())
        }
    }
}

/// Drive `session` from line-based input until it finishes or the user quits.
///
/// Returns the result when a leaf was reached, `None` on quit or end of input.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut Session<'_>,
    input: &mut R,
    out: &mut W,
) -> CliResult<Option<TraversalResult>> {
    let io_err = |e: io::Error| CliError::from(InfraError::io("interactive session", e));

    while let Some(question) = session.current_question() {
        let progress = session.progress();
        writeln!(
            out,
            "\nQuestion {} of {} ({}%)",
            progress.question_number(),
            progress.tree_height,
            progress.percent()
        )
        .map_err(io_err)?;
        writeln!(out, "{question}").map_err(io_err)?;
        write!(out, "[y]es / [n]o / [u]ndo / [q]uit > ").map_err(io_err)?;
        out.flush().map_err(io_err)?;

        let mut line = String::new();
        if input.read_line(&mut line).map_err(io_err)? == 0 {
            return Ok(None);
        }

        match line.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => step(session, true, out).map_err(io_err)?,
            "n" | "no" => step(session, false, out).map_err(io_err)?,
            "u" | "undo" => {
                if !session.undo() {
                    writeln!(out, "Nothing to undo.").map_err(io_err)?;
                }
            }
            "q" | "quit" => return Ok(None),
            other => writeln!(out, "Unrecognised answer '{other}'.").map_err(io_err)?,
        }
    }

    Ok(session.result())
}

fn step<W: Write>(session: &mut Session<'_>, answer: bool, out: &mut W) -> io::Result<()> {
    if session.answer(answer) == Step::Ignored {
        writeln!(out, "No question follows that answer, try the other one or undo.")?;
    }
    Ok(())
}

#[instrument(level = "debug", skip(container))]
fn walk(container: &ServiceContainer, answers: &str, record: bool) -> CliResult<()> {
    let answers = parse_answers(answers)?;
    let result = container.engine.traverse(&answers);

    if result.reached_leaf() {
        if answers.len() > result.depth {
            debug!("ignored {} trailing answers", answers.len() - result.depth);
        }
        return finish(container, &result, record);
    }

    print_path(&result, &answers);
    let session = container.engine.replay(&answers);
    match session.current_question() {
        Some(next) if session.answers().len() == answers.len() => {
            output::warning("not enough answers to reach a recommendation");
            output::action("Next question", next);
        }
        _ => output::warning("the answers lead to a branch with no further questions"),
    }
    Ok(())
}

fn finish(container: &ServiceContainer, result: &TraversalResult, record: bool) -> CliResult<()> {
    let stats = container.engine.stats();
    print_result(result, &stats);

    if record && container.settings.record_history {
        let entry = SessionRecord::new(result, &stats);
        let id = entry.id;
        container.history()?.record(entry)?;
        debug!("recorded session {}", id);
    }
    Ok(())
}

fn print_path(result: &TraversalResult, answers: &[bool]) {
    output::header("Path");
    for (question, answer) in result.path.iter().zip(answers.iter().copied()) {
        output::detail(&format!("{} {}", question, output::answer_marker(answer)));
    }
}

fn print_result(result: &TraversalResult, stats: &TreeStats) {
    output::header("Recommendation");
    output::success(&genre::labels(&result.tags));
    output::action(
        "Genre ids",
        &result
            .tags
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(", "),
    );
    output::action(
        "Questions answered",
        &format!("{} of at most {}", result.depth, stats.height),
    );
    output::action("Nodes visited", &result.visited_nodes);
    output::action(
        "Depth vs. height",
        &format!("{:.1}%", stats.efficiency_percent(result.depth)),
    );
    output::action("Time", &format!("{:.3} ms", result.elapsed_ms()));
}

fn stats(container: &ServiceContainer) -> CliResult<()> {
    let stats = container.engine.stats();
    output::header("Question tree");
    output::action("Height", &stats.height);
    output::action("Total nodes", &stats.total_nodes);
    output::action("Questions", &stats.question_count());
    output::action("Leaves", &stats.leaf_count);
    output::action("Balanced depth", &stats.balanced_depth);
    output::action(
        "Balanced vs. height",
        &format!("{:.1}%", stats.efficiency_percent(stats.balanced_depth)),
    );
    Ok(())
}

fn questions(container: &ServiceContainer) -> CliResult<()> {
    let all = metrics::all_questions(container.engine.tree());
    output::header(&format!("{} questions", all.len()));
    for (i, question) in all.iter().enumerate() {
        output::info(&format!("{:>4}. {}", i + 1, question));
    }
    Ok(())
}

fn node_label(node: &QuestionNode) -> String {
    match &node.question {
        Some(q) => q.clone(),
        None => format!("[{}]", genre::labels(node.tag_slice())),
    }
}

/// Render the tree below the root; nodes deeper than `max_depth` collapse to `...`.
pub fn render_tree(tree: &QuestionTree, max_depth: Option<usize>) -> Tree<String> {
    subtree(tree, tree.root(), node_label(tree.root_node()), 0, max_depth)
}

fn subtree(
    tree: &QuestionTree,
    idx: NodeId,
    label: String,
    depth: usize,
    max_depth: Option<usize>,
) -> Tree<String> {
    let mut rendered = Tree::new(label);
    let Some(node) = tree.node(idx) else {
        return rendered;
    };
    if node.is_leaf() {
        return rendered;
    }
    if max_depth.is_some_and(|max| depth >= max) {
        rendered.push(Tree::new("...".to_string()));
        return rendered;
    }

    for (answer, branch) in [("yes", node.yes), ("no", node.no)] {
        if let Some((child, child_node)) = branch.and_then(|c| tree.node(c).map(|n| (c, n))) {
            let label = format!("{}: {}", answer, node_label(child_node));
            rendered.push(subtree(tree, child, label, depth + 1, max_depth));
        }
    }
    rendered
}

fn history_command(command: &HistoryCommands, container: &ServiceContainer) -> CliResult<()> {
    let mut history = container.history()?;

    match command {
        HistoryCommands::List { genre: filter } => {
            let sessions: Vec<&SessionRecord> = match filter {
                Some(g) => history.by_genre(*g),
                None => history.sessions().collect(),
            };
            if sessions.is_empty() {
                output::info("No sessions recorded.");
                return Ok(());
            }
            output::header(&format!("{} sessions", sessions.len()));
            for s in sessions {
                output::info(&format!(
                    "{}  {}  depth {:>2}  {}",
                    s.id,
                    s.recorded_at.format("%Y-%m-%d %H:%M:%S"),
                    s.depth,
                    genre::labels(&s.genres)
                ));
            }
        }
        HistoryCommands::Stats => {
            let stats = history.statistics();
            output::header("History");
            output::action("Sessions", &stats.total_sessions);
            output::action("Average depth", &format!("{:.2}", stats.average_depth));
            output::action(
                "Average nodes visited",
                &format!("{:.2}", stats.average_visited_nodes),
            );
            if !stats.most_used_genres.is_empty() {
                output::header("Most used genres");
                for g in &stats.most_used_genres {
                    output::detail(&format!("{:<16} {}", g.name, g.count));
                }
            }
        }
        HistoryCommands::Remove { id } => {
            let removed = history.remove(id)?;
            output::success(&format!("removed session {}", removed.id));
        }
        HistoryCommands::Clear => {
            let count = history.len();
            history.clear()?;
            output::success(&format!("cleared {count} sessions"));
        }
        HistoryCommands::Export => output::info(&history.export()?),
    }
    Ok(())
}

fn config_command(command: &ConfigCommands, settings: &Settings, cli: &Cli) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => {
            let global = global_config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(unavailable)".to_string());
            output::action("Global", &global);
            if let Some(explicit) = &cli.config {
                output::action("Explicit", &explicit.display());
            }
            output::action("History", &settings.history_file().display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::genre::{ACTION, COMEDY, SCIENCE_FICTION};
    use crate::domain::{DecisionEngine, Phase};
    use rstest::rstest;
    use std::io::Cursor;

    fn drive(engine: &DecisionEngine, script: &str) -> (Option<TraversalResult>, String) {
        let mut session = engine.start_session();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let result = run_session(&mut session, &mut input, &mut out).expect("session runs");
        (result, String::from_utf8(out).expect("utf8 output"))
    }

    #[rstest]
    #[case("nyyynn", vec![false, true, true, true, false, false])]
    #[case("Y N 1 0", vec![true, false, true, false])]
    #[case("t,f", vec![true, false])]
    #[case("", vec![])]
    fn given_answer_string_when_parsing_then_maps_to_bools(
        #[case] input: &str,
        #[case] expected: Vec<bool>,
    ) {
        assert_eq!(parse_answers(input).expect("valid answers"), expected);
    }

    #[test]
    fn given_unknown_character_when_parsing_then_invalid_args() {
        let err = parse_answers("yx").unwrap_err();
        assert!(matches!(err, CliError::InvalidArgs(_)));
    }

    #[test]
    fn given_scripted_answers_when_running_session_then_reaches_comedy() {
        let engine = DecisionEngine::new().expect("catalog loads");
        let (result, out) = drive(&engine, "n\ny\ny\ny\nn\nn\n");

        let result = result.expect("leaf reached");
        assert_eq!(result.tags, vec![COMEDY]);
        assert!(out.contains("Question 1 of 12"));
        assert!(out.contains("Question 6 of 12"));
    }

    #[test]
    fn given_undo_in_script_when_running_session_then_matches_corrected_walk() {
        let engine = DecisionEngine::new().expect("catalog loads");
        let (result, out) = drive(&engine, "n\nu\ny\ny\ny\ny\ny\ny\ny\ny\ny\ny\n");

        let result = result.expect("leaf reached");
        assert_eq!(result, engine.traverse(&[true; 10]));
        assert!(result.elapsed_ms() < 50.0);
        assert_eq!(out.matches("Question 1 of 12").count(), 2);
    }

    #[test]
    fn given_undo_on_first_question_when_running_session_then_reports_nothing_to_undo() {
        let engine = DecisionEngine::new().expect("catalog loads");
        let (result, out) = drive(&engine, "u\nq\n");

        assert!(result.is_none());
        assert!(out.contains("Nothing to undo."));
    }

    #[test]
    fn given_end_of_input_when_running_session_then_returns_none() {
        let engine = DecisionEngine::new().expect("catalog loads");
        let mut session = engine.start_session();
        let mut input = Cursor::new(b"y\nmaybe\n".to_vec());
        let mut out = Vec::new();

        let result = run_session(&mut session, &mut input, &mut out).expect("session runs");

        assert!(result.is_none());
        assert_eq!(session.answers(), &[true]);
        assert_eq!(session.phase(), Phase::Answering);
        assert!(String::from_utf8(out).unwrap().contains("Unrecognised answer 'maybe'"));
    }

    #[test]
    fn given_max_depth_zero_when_rendering_then_only_root_and_marker() {
        let engine = DecisionEngine::new().expect("catalog loads");
        let rendered = render_tree(engine.tree(), Some(0)).to_string();

        assert_eq!(rendered.lines().count(), 2);
        assert!(rendered.lines().nth(1).unwrap().contains("..."));
    }

    #[test]
    fn given_full_render_when_counting_lines_then_one_per_node() {
        let engine = DecisionEngine::new().expect("catalog loads");
        let rendered = render_tree(engine.tree(), None).to_string();

        assert_eq!(rendered.lines().count(), engine.stats().total_nodes);
        assert!(rendered.contains(genre::label(ACTION)));
        assert!(rendered.contains(genre::label(SCIENCE_FICTION)));
    }
}
