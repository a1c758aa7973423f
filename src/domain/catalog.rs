//! The shipped question hierarchy.
//!
//! The tree is a compile-time constant: each `ask!` is an internal node with
//! its question and yes/no branches, each `pick!` a leaf with its ordered
//! genre tags. Downstream query construction depends on the exact tag list
//! of every leaf, so edits here change recommendations.

use crate::domain::genre::*;

/// Static description of one node, as authored.
///
/// Mirrors the runtime [`QuestionNode`](crate::domain::tree::QuestionNode)
/// shape: a question with branches, or tags without a question. Branches are
/// optional so that hand-written trees with gaps can still be loaded.
#[derive(Debug)]
pub struct NodeSpec {
    pub question: Option<&'static str>,
    pub yes: Option<&'static NodeSpec>,
    pub no: Option<&'static NodeSpec>,
    pub tags: Option<&'static [GenreId]>,
}

macro_rules! ask {
    ($question:literal, yes: $yes:expr, no: $no:expr $(,)?) => {
        NodeSpec {
            question: Some($question),
            yes: Some(&$yes),
            no: Some(&$no),
            tags: None,
        }
    };
}

macro_rules! pick {
    [$($tag:expr),+ $(,)?] => {
        NodeSpec {
            question: None,
            yes: None,
            no: None,
            tags: Some(&[$($tag),+]),
        }
    };
}

/// Root of the movie-genre questionnaire.
pub static CATALOG: NodeSpec =
    ask!(
        "Are you in the mood for something energized and exciting?",
        yes: ask!(
            "Do you want high-energy action",
            yes: ask!(
                "Do you prefer superhero over fantasy action?",
                yes: ask!(
                    "Do you prefer sci-fi over magical fantasy?",
                    yes: ask!(
                        "Do you like dystopian futures?",
                        yes: ask!(
                            "Should it be dark and serious?",
                            yes: ask!(
                                "Do you prefer psychological themes?",
                                yes: ask!(
                                    "Should it be mind-bending?",
                                    yes: ask!(
                                        "Do you like philosophical questions?",
                                        yes: ask!(
                                            "Should it have action sequences?",
                                            yes: pick![ACTION, SCIENCE_FICTION],
                                            no: pick![SCIENCE_FICTION, DRAMA],
                                        ),
                                        no: pick![ACTION, SCIENCE_FICTION],
                                    ),
                                    no: pick![THRILLER, SCIENCE_FICTION],
                                ),
                                no: ask!(
                                    "Do you like survival themes?",
                                    yes: ask!(
                                        "Should it have adventure elements?",
                                        yes: pick![ACTION, ADVENTURE, SCIENCE_FICTION],
                                        no: pick![ACTION, SCIENCE_FICTION],
                                    ),
                                    no: pick![ACTION, SCIENCE_FICTION],
                                ),
                            ),
                            no: ask!(
                                "Do you like space exploration?",
                                yes: ask!(
                                    "Should it have humor?",
                                    yes: ask!(
                                        "Do you prefer adventure tone?",
                                        yes: pick![ACTION, ADVENTURE, COMEDY, SCIENCE_FICTION],
                                        no: pick![COMEDY, SCIENCE_FICTION],
                                    ),
                                    no: pick![ACTION, ADVENTURE, SCIENCE_FICTION],
                                ),
                                no: ask!(
                                    "Do you like tech/cyberpunk aesthetics?",
                                    yes: ask!(
                                        "Should it be noir-style?",
                                        yes: pick![ACTION, CRIME, SCIENCE_FICTION],
                                        no: pick![ACTION, SCIENCE_FICTION],
                                    ),
                                    no: pick![ACTION, SCIENCE_FICTION],
                                ),
                            ),
                        ),
                        no: ask!(
                            "Should it be epic/grand scale?",
                            yes: ask!(
                                "Do you like mythology and magical worlds?",
                                yes: ask!(
                                    "Should it have dark elements?",
                                    yes: ask!(
                                        "Do you like complex plots?",
                                        yes: pick![ACTION, FANTASY, ADVENTURE],
                                        no: pick![FANTASY, ADVENTURE],
                                    ),
                                    no: pick![ACTION, FANTASY, ADVENTURE],
                                ),
                                no: ask!(
                                    "Should it have romance elements?",
                                    yes: ask!(
                                        "Do you prefer happy endings?",
                                        yes: pick![FANTASY, ADVENTURE, ROMANCE],
                                        no: pick![FANTASY, ADVENTURE],
                                    ),
                                    no: pick![ACTION, FANTASY, ADVENTURE],
                                ),
                            ),
                            no: ask!(
                                "Do you like adventure with humor?",
                                yes: ask!(
                                    "Should it be whimsical?",
                                    yes: ask!(
                                        "Do you like family-friendly content?",
                                        yes: pick![FANTASY, ADVENTURE, COMEDY, FAMILY],
                                        no: pick![FANTASY, ADVENTURE, COMEDY],
                                    ),
                                    no: pick![ACTION, FANTASY, ADVENTURE],
                                ),
                                no: pick![FANTASY, ADVENTURE],
                            ),
                        ),
                    ),
                    no: ask!(
                        "Do you like heist and crime stories?",
                        yes: ask!(
                            "Should it have thriller elements?",
                            yes: ask!(
                                "Do you like detective mysteries?",
                                yes: ask!(
                                    "Should it be dark and gritty?",
                                    yes: ask!(
                                        "Do you prefer psychological complexity?",
                                        yes: ask!(
                                            "Should it be slow-burn?",
                                            yes: ask!(
                                                "Do you like unreliable narrators?",
                                                yes: pick![ACTION, CRIME, THRILLER],
                                                no: pick![ACTION, CRIME, DRAMA],
                                            ),
                                            no: ask!(
                                                "Should it be high-stakes?",
                                                yes: pick![ACTION, CRIME, THRILLER],
                                                no: pick![ACTION, CRIME],
                                            ),
                                        ),
                                        no: ask!(
                                            "Should it have humor?",
                                            yes: pick![ACTION, COMEDY, CRIME],
                                            no: pick![ACTION, CRIME],
                                        ),
                                    ),
                                    no: pick![ACTION, CRIME],
                                ),
                                no: ask!(
                                    "Do you like elaborate plans?",
                                    yes: ask!(
                                        "Should it be comedic?",
                                        yes: ask!(
                                            "Do you like witty dialogue?",
                                            yes: pick![ACTION, COMEDY, CRIME],
                                            no: pick![ACTION, COMEDY],
                                        ),
                                        no: ask!(
                                            "Should it be fast-paced?",
                                            yes: pick![ACTION, CRIME],
                                            no: pick![ACTION, CRIME],
                                        ),
                                    ),
                                    no: ask!(
                                        "Do you prefer action-heavy?",
                                        yes: pick![ACTION, CRIME],
                                        no: pick![ACTION],
                                    ),
                                ),
                            ),
                            no: ask!(
                                "Should it be international/exotic?",
                                yes: ask!(
                                    "Do you like treasure hunting?",
                                    yes: ask!(
                                        "Should it have historical elements?",
                                        yes: pick![ADVENTURE, ACTION, HISTORY],
                                        no: pick![ADVENTURE, ACTION],
                                    ),
                                    no: pick![ADVENTURE, ACTION],
                                ),
                                no: pick![ACTION, CRIME],
                            ),
                        ),
                        no: ask!(
                            "Do you like martial arts and combat sports?",
                            yes: ask!(
                                "Should it be historical?",
                                yes: ask!(
                                    "Do you prefer Eastern settings?",
                                    yes: ask!(
                                        "Should it be story-focused?",
                                        yes: ask!(
                                            "Do you like philosophical themes?",
                                            yes: pick![ACTION, DRAMA, HISTORY],
                                            no: pick![ACTION, DRAMA],
                                        ),
                                        no: ask!(
                                            "Should it be fast-paced?",
                                            yes: pick![ACTION],
                                            no: pick![ACTION, HISTORY],
                                        ),
                                    ),
                                    no: ask!(
                                        "Do you prefer modern?",
                                        yes: pick![ACTION],
                                        no: pick![ACTION, HISTORY],
                                    ),
                                ),
                                no: ask!(
                                    "Should it be competitive/tournament?",
                                    yes: ask!(
                                        "Do you like underdog stories?",
                                        yes: ask!(
                                            "Should it be inspirational?",
                                            yes: pick![ACTION, DRAMA],
                                            no: pick![ACTION],
                                        ),
                                        no: ask!(
                                            "Do you like revenge themes?",
                                            yes: pick![ACTION, DRAMA],
                                            no: pick![ACTION],
                                        ),
                                    ),
                                    no: ask!(
                                        "Do you prefer realistic?",
                                        yes: pick![ACTION],
                                        no: pick![ACTION, FANTASY],
                                    ),
                                ),
                            ),
                            no: ask!(
                                "Do you prefer exploration over combat?",
                                yes: ask!(
                                    "Should it be treasure hunting?",
                                    yes: ask!(
                                        "Do you prefer ancient mysteries?",
                                        yes: pick![ADVENTURE, ACTION, HISTORY],
                                        no: pick![ADVENTURE, ACTION],
                                    ),
                                    no: ask!(
                                        "Do you like survival elements?",
                                        yes: pick![ADVENTURE, ACTION],
                                        no: pick![ADVENTURE, ACTION],
                                    ),
                                ),
                                no: ask!(
                                    "Do you prefer military themes?",
                                    yes: ask!(
                                        "Should it be modern warfare?",
                                        yes: pick![ACTION, WAR],
                                        no: pick![ACTION, WAR, HISTORY],
                                    ),
                                    no: ask!(
                                        "Do you like chase sequences?",
                                        yes: pick![ACTION, CRIME],
                                        no: pick![ACTION, CRIME],
                                    ),
                                ),
                            ),
                        ),
                    ),
                ),
                no: ask!(
                    "Do you want something fun and uplifting?",
                    yes: ask!(
                        "Do you prefer witty humor?",
                        yes: ask!(
                            "Do you like romantic comedy?",
                            yes: ask!(
                                "Should it be contemporary?",
                                yes: ask!(
                                    "Do you prefer a warm tone?",
                                    yes: ask!(
                                        "Should it have quirky characters?",
                                        yes: pick![COMEDY, ROMANCE],
                                        no: pick![COMEDY, ROMANCE],
                                    ),
                                    no: pick![COMEDY, ROMANCE],
                                ),
                                no: ask!(
                                    "Do you prefer a light tone?",
                                    yes: pick![COMEDY, ROMANCE, HISTORY],
                                    no: pick![COMEDY, ROMANCE],
                                ),
                            ),
                            no: ask!(
                                "Do you like satire?",
                                yes: ask!(
                                    "Do you prefer political and social satire?",
                                    yes: ask!(
                                        "Do you like dark comedy?",
                                        yes: pick![COMEDY],
                                        no: pick![COMEDY],
                                    ),
                                    no: ask!(
                                        "Do you like parody films?",
                                        yes: pick![COMEDY],
                                        no: pick![COMEDY],
                                    ),
                                ),
                                no: ask!(
                                    "Should it be ensemble cast?",
                                    yes: ask!(
                                        "Do you prefer workplace comedy?",
                                        yes: pick![COMEDY],
                                        no: pick![COMEDY],
                                    ),
                                    no: ask!(
                                        "Do you like underdog stories?",
                                        yes: pick![COMEDY],
                                        no: pick![COMEDY],
                                    ),
                                ),
                            ),
                        ),
                        no: ask!(
                            "Do you want family-friendly content?",
                            yes: ask!(
                                "Should it have fantasy or magical elements?",
                                yes: ask!(
                                    "Do you like animation?",
                                    yes: ask!(
                                        "Should it have adventure elements?",
                                        yes: pick![ANIMATION, COMEDY, FANTASY, FAMILY],
                                        no: pick![ANIMATION, COMEDY, FAMILY],
                                    ),
                                    no: pick![COMEDY, FANTASY, FAMILY],
                                ),
                                no: ask!(
                                    "Do you like feel-good stories?",
                                    yes: pick![COMEDY, FAMILY],
                                    no: pick![COMEDY],
                                ),
                            ),
                            no: ask!(
                                "Do you like action-comedy?",
                                yes: ask!(
                                    "Should it be heist-based?",
                                    yes: pick![ACTION, COMEDY, CRIME],
                                    no: pick![ACTION, COMEDY],
                                ),
                                no: ask!(
                                    "Do you prefer quirky or crude humor?",
                                    yes: ask!(
                                        "Do you like dark comedy?",
                                        yes: pick![COMEDY],
                                        no: pick![COMEDY],
                                    ),
                                    no: ask!(
                                        "Do you prefer parody/spoof films?",
                                        yes: pick![COMEDY],
                                        no: pick![COMEDY],
                                    ),
                                ),
                            ),
                        ),
                    ),
                    no: ask!(
                        "Do you like exploration and discovery?",
                        yes: ask!(
                            "Should it have fantasy elements?",
                            yes: ask!(
                                "Do you prefer magical elements?",
                                yes: pick![FANTASY, ADVENTURE],
                                no: pick![ADVENTURE, FANTASY],
                            ),
                            no: ask!(
                                "Do you prefer nature-focused themes?",
                                yes: ask!(
                                    "Do you like documentary style?",
                                    yes: ask!(
                                        "Should it be wildlife focused?",
                                        yes: pick![DOCUMENTARY, ADVENTURE],
                                        no: pick![ADVENTURE, DOCUMENTARY],
                                    ),
                                    no: ask!(
                                        "Do you prefer survival stories?",
                                        yes: pick![ADVENTURE, THRILLER],
                                        no: pick![ADVENTURE, DRAMA],
                                    ),
                                ),
                                no: ask!(
                                    "Do you prefer ancient civilizations?",
                                    yes: pick![ADVENTURE, HISTORY],
                                    no: pick![ADVENTURE, HISTORY, DRAMA],
                                ),
                            ),
                        ),
                        no: ask!(
                            "Do you want something musical?",
                            yes: ask!(
                                "Do you prefer drama with music?",
                                yes: ask!(
                                    "Should it be biographical?",
                                    yes: pick![MUSIC, DRAMA, HISTORY],
                                    no: pick![MUSIC, DRAMA],
                                ),
                                no: ask!(
                                    "Do you like comedy musicals?",
                                    yes: pick![MUSIC, COMEDY],
                                    no: pick![MUSIC, ROMANCE],
                                ),
                            ),
                            no: ask!(
                                "Do you prefer fantasy elements?",
                                yes: ask!(
                                    "Should it be magical?",
                                    yes: pick![FANTASY, ADVENTURE, FAMILY],
                                    no: pick![ADVENTURE, FANTASY],
                                ),
                                no: ask!(
                                    "Do you prefer historical settings?",
                                    yes: pick![ADVENTURE, HISTORY],
                                    no: pick![ADVENTURE, DRAMA],
                                ),
                            ),
                        ),
                    ),
                ),
            ),
            no: ask!(
                "Do you prefer thriller content?",
                yes: ask!(
                    "Should it be psychological?",
                    yes: ask!(
                        "Do you like mystery elements?",
                        yes: ask!(
                            "Should it be dark and intense?",
                            yes: ask!(
                                "Do you prefer unreliable narrators?",
                                yes: ask!(
                                    "Should it be mind-bending?",
                                    yes: ask!(
                                        "Do you like philosophical themes?",
                                        yes: pick![THRILLER, DRAMA],
                                        no: pick![THRILLER],
                                    ),
                                    no: pick![THRILLER],
                                ),
                                no: ask!(
                                    "Do you like crime elements?",
                                    yes: ask!(
                                        "Should it be gritty?",
                                        yes: pick![THRILLER, CRIME],
                                        no: pick![THRILLER, CRIME],
                                    ),
                                    no: pick![THRILLER],
                                ),
                            ),
                            no: ask!(
                                "Should it be witty?",
                                yes: ask!(
                                    "Do you like humor in thrillers?",
                                    yes: pick![THRILLER, COMEDY],
                                    no: pick![THRILLER],
                                ),
                                no: pick![THRILLER],
                            ),
                        ),
                        no: ask!(
                            "Do you like slow-burn tension?",
                            yes: ask!(
                                "Should it have horror elements?",
                                yes: ask!(
                                    "Do you prefer supernatural?",
                                    yes: ask!(
                                        "Should it be atmospheric?",
                                        yes: pick![HORROR, THRILLER],
                                        no: pick![THRILLER],
                                    ),
                                    no: pick![HORROR, THRILLER],
                                ),
                                no: ask!(
                                    "Do you like character development?",
                                    yes: pick![THRILLER, DRAMA],
                                    no: pick![THRILLER],
                                ),
                            ),
                            no: ask!(
                                "Should it have action?",
                                yes: ask!(
                                    "Do you prefer spy/espionage?",
                                    yes: ask!(
                                        "Should it be international?",
                                        yes: pick![THRILLER, ADVENTURE],
                                        no: pick![THRILLER],
                                    ),
                                    no: ask!(
                                        "Do you like revenge plots?",
                                        yes: pick![THRILLER, CRIME],
                                        no: pick![THRILLER],
                                    ),
                                ),
                                no: ask!(
                                    "Do you prefer cat-and-mouse plots?",
                                    yes: ask!(
                                        "Should it involve crime?",
                                        yes: pick![THRILLER, CRIME],
                                        no: pick![THRILLER, MYSTERY],
                                    ),
                                    no: pick![THRILLER],
                                ),
                            ),
                        ),
                    ),
                    no: ask!(
                        "Do you prefer spy stories?",
                        yes: ask!(
                            "Should it be realistic?",
                            yes: ask!(
                                "Do you like political themes?",
                                yes: ask!(
                                    "Should it be intense?",
                                    yes: pick![THRILLER],
                                    no: pick![THRILLER, DRAMA],
                                ),
                                no: pick![THRILLER],
                            ),
                            no: ask!(
                                "Should it be humorous?",
                                yes: ask!(
                                    "Do you like ensemble casts?",
                                    yes: pick![THRILLER, COMEDY],
                                    no: pick![THRILLER, COMEDY],
                                ),
                                no: pick![THRILLER],
                            ),
                        ),
                        no: ask!(
                            "Should it be organized crime?",
                            yes: ask!(
                                "Do you like epic/saga stories?",
                                yes: ask!(
                                    "Should it be dark?",
                                    yes: pick![THRILLER, CRIME, DRAMA],
                                    no: pick![THRILLER, CRIME],
                                ),
                                no: pick![THRILLER, CRIME],
                            ),
                            no: ask!(
                                "Should it be gritty?",
                                yes: ask!(
                                    "Do you like raw tension?",
                                    yes: pick![THRILLER, CRIME],
                                    no: pick![THRILLER, CRIME],
                                ),
                                no: pick![THRILLER],
                            ),
                        ),
                    ),
                ),
                no: ask!(
                    "Do you like emotional stories?",
                    yes: ask!(
                        "Should it be inspirational?",
                        yes: ask!(
                            "Do you prefer true stories?",
                            yes: ask!(
                                "Should it be biographical?",
                                yes: ask!(
                                    "Do you like personal growth themes?",
                                    yes: ask!(
                                        "Should it be uplifting?",
                                        yes: pick![DRAMA, HISTORY],
                                        no: pick![DRAMA],
                                    ),
                                    no: pick![DRAMA, HISTORY],
                                ),
                                no: ask!(
                                    "Should it be epic/grand?",
                                    yes: pick![DRAMA, HISTORY],
                                    no: pick![DRAMA],
                                ),
                            ),
                            no: ask!(
                                "Do you like overcoming adversity?",
                                yes: ask!(
                                    "Should it be feel-good?",
                                    yes: pick![DRAMA, ADVENTURE],
                                    no: pick![DRAMA],
                                ),
                                no: pick![DRAMA],
                            ),
                        ),
                        no: ask!(
                            "Do you like family relationships?",
                            yes: ask!(
                                "Should it have generational themes?",
                                yes: ask!(
                                    "Do you prefer contemporary or historical?",
                                    yes: pick![DRAMA],
                                    no: pick![DRAMA, HISTORY],
                                ),
                                no: pick![DRAMA],
                            ),
                            no: ask!(
                                "Do you like political themes?",
                                yes: ask!(
                                    "Should it be intense?",
                                    yes: pick![DRAMA],
                                    no: pick![DRAMA, COMEDY],
                                ),
                                no: pick![DRAMA],
                            ),
                        ),
                    ),
                    no: ask!(
                        "Do you like romance as main focus?",
                        yes: ask!(
                            "Should it be contemporary?",
                            yes: ask!(
                                "Do you like comedy in romance?",
                                yes: ask!(
                                    "Should it be witty?",
                                    yes: pick![COMEDY, ROMANCE],
                                    no: pick![ROMANCE, COMEDY],
                                ),
                                no: ask!(
                                    "Do you prefer happy endings?",
                                    yes: pick![ROMANCE],
                                    no: pick![ROMANCE, DRAMA],
                                ),
                            ),
                            no: ask!(
                                "Do you like historical settings?",
                                yes: ask!(
                                    "Should it be epic?",
                                    yes: pick![ROMANCE, HISTORY],
                                    no: pick![ROMANCE],
                                ),
                                no: ask!(
                                    "Do you like fantasy elements?",
                                    yes: pick![ROMANCE, FANTASY],
                                    no: pick![ROMANCE],
                                ),
                            ),
                        ),
                        no: pick![DRAMA],
                    ),
                ),
            ),
        ),
        no: ask!(
            "Do you prefer something comforting?",
            yes: ask!(
                "Do you prefer feel-good content?",
                yes: ask!(
                    "Do you prefer comedy?",
                    yes: ask!(
                        "Do you like comedy that makes you think?",
                        yes: ask!(
                            "Do you prefer character-driven comedy?",
                            yes: pick![COMEDY, DRAMA],
                            no: pick![COMEDY],
                        ),
                        no: ask!(
                            "Do you prefer slapstick or witty?",
                            yes: pick![ANIMATION, COMEDY, FAMILY],
                            no: pick![COMEDY],
                        ),
                    ),
                    no: ask!(
                        "Should it be family-friendly?",
                        yes: ask!(
                            "Do you like adventure elements?",
                            yes: pick![DRAMA, ADVENTURE, FAMILY],
                            no: pick![DRAMA, FAMILY],
                        ),
                        no: ask!(
                            "Do you like romantic elements?",
                            yes: pick![DRAMA, ROMANCE],
                            no: pick![DRAMA],
                        ),
                    ),
                ),
                no: ask!(
                    "Should it be historical?",
                    yes: ask!(
                        "Do you prefer drama over adventure?",
                        yes: ask!(
                            "Should it be biographical?",
                            yes: pick![DRAMA, HISTORY],
                            no: pick![DRAMA, HISTORY],
                        ),
                        no: ask!(
                            "Should it have fantasy elements?",
                            yes: pick![ADVENTURE, HISTORY, FANTASY],
                            no: pick![ADVENTURE, HISTORY],
                        ),
                    ),
                    no: ask!(
                        "Do you like coming-of-age stories?",
                        yes: ask!(
                            "Should it be teen-focused?",
                            yes: ask!(
                                "Do you prefer humor?",
                                yes: pick![DRAMA, COMEDY],
                                no: pick![DRAMA],
                            ),
                            no: ask!(
                                "Should it be emotionally heavy?",
                                yes: pick![DRAMA],
                                no: pick![DRAMA, ROMANCE],
                            ),
                        ),
                        no: ask!(
                            "Do you prefer romantic stories?",
                            yes: ask!(
                                "Should it be lighthearted?",
                                yes: pick![ROMANCE, COMEDY],
                                no: pick![ROMANCE, DRAMA],
                            ),
                            no: ask!(
                                "Do you like heartwarming stories?",
                                yes: pick![DRAMA, FAMILY],
                                no: pick![DRAMA],
                            ),
                        ),
                    ),
                ),
            ),
            no: ask!(
                "Do you like thought-provoking content?",
                yes: ask!(
                    "Do you prefer drama?",
                    yes: ask!(
                        "Do you like social issues?",
                        yes: ask!(
                            "Should it be intense?",
                            yes: ask!(
                                "Do you prefer political themes?",
                                yes: pick![DRAMA, THRILLER],
                                no: pick![DRAMA],
                            ),
                            no: ask!(
                                "Should it have humor?",
                                yes: pick![DRAMA, COMEDY],
                                no: pick![DRAMA],
                            ),
                        ),
                        no: ask!(
                            "Do you prefer character-driven stories?",
                            yes: ask!(
                                "Should it be introspective?",
                                yes: pick![DRAMA],
                                no: pick![DRAMA, ROMANCE],
                            ),
                            no: ask!(
                                "Do you like ambiguous endings?",
                                yes: pick![DRAMA, MYSTERY],
                                no: pick![DRAMA],
                            ),
                        ),
                    ),
                    no: ask!(
                        "Do you like hard sci-fi concepts?",
                        yes: ask!(
                            "Should it be action-packed?",
                            yes: pick![ACTION, SCIENCE_FICTION],
                            no: pick![SCIENCE_FICTION, DRAMA],
                        ),
                        no: ask!(
                            "Do you prefer character stories?",
                            yes: ask!(
                                "Should it be emotional?",
                                yes: pick![SCIENCE_FICTION, DRAMA],
                                no: pick![SCIENCE_FICTION, ADVENTURE],
                            ),
                            no: ask!(
                                "Do you like alien themes?",
                                yes: pick![SCIENCE_FICTION, THRILLER],
                                no: pick![SCIENCE_FICTION, MYSTERY],
                            ),
                        ),
                    ),
                ),
                no: ask!(
                    "Do you like mysteries?",
                    yes: ask!(
                        "Do you prefer thriller?",
                        yes: ask!(
                            "Do you like psychological depth?",
                            yes: ask!(
                                "Do you prefer dark themes?",
                                yes: pick![THRILLER, CRIME, MYSTERY],
                                no: pick![THRILLER, MYSTERY],
                            ),
                            no: ask!(
                                "Should it be fast-paced?",
                                yes: pick![THRILLER, ACTION],
                                no: pick![THRILLER],
                            ),
                        ),
                        no: ask!(
                            "Should it be serious or witty?",
                            yes: pick![CRIME, THRILLER],
                            no: pick![CRIME, COMEDY],
                        ),
                    ),
                    no: ask!(
                        "Do you like horror with substance?",
                        yes: ask!(
                            "Do you prefer psychological horror?",
                            yes: ask!(
                                "Should it be supernatural?",
                                yes: pick![HORROR, THRILLER, FANTASY],
                                no: pick![HORROR, THRILLER],
                            ),
                            no: ask!(
                                "Do you like creature features?",
                                yes: pick![HORROR, SCIENCE_FICTION],
                                no: pick![HORROR, DRAMA],
                            ),
                        ),
                        no: ask!(
                            "Do you prefer fantasy worlds?",
                            yes: ask!(
                                "Should it be epic scale?",
                                yes: pick![FANTASY, DRAMA, ADVENTURE],
                                no: pick![FANTASY, DRAMA],
                            ),
                            no: ask!(
                                "Do you like slice-of-life stories?",
                                yes: pick![DRAMA],
                                no: ask!(
                                    "Should it be historically grounded?",
                                    yes: pick![DRAMA, HISTORY],
                                    no: pick![DRAMA, MYSTERY],
                                ),
                            ),
                        ),
                    ),
                ),
            ),
        ),
    );
