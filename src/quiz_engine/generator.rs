use std::sync::LazyLock;

use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use regex::Regex;
use tracing::{debug, trace};

use crate::error::QuizError;
use crate::quiz_engine::{
    distractors::distractors,
    falsifier::falsify,
    helpers::{blank_first_word, blank_word, shuffle},
    models::{Difficulty, Numbering, Question, Quiz, QuizRequest},
    selector::{pool, sample_with_replacement},
    target::choose_target,
    tokenizer::{segment, Corpus},
};

/// Texts with fewer word tokens than this are rejected by [`check_source_text`].
pub const MIN_SOURCE_WORDS: usize = 20;

pub const TRUE: &str = "True";
pub const FALSE: &str = "False";

static SOURCE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\b)[a-zA-Z0-9'-]+(?-u:\b)").expect("source word pattern"));

/// Count word tokens and reject texts too short to quiz on.
pub fn check_source_text(text: &str) -> Result<usize, QuizError> {
    let words = SOURCE_WORD.find_iter(text).count();
    if words < MIN_SOURCE_WORDS {
        return Err(QuizError::InsufficientText { words, required: MIN_SOURCE_WORDS });
    }
    Ok(words)
}

/// Generate a unique quiz ID from difficulty + RNG.
fn make_quiz_id(difficulty: Difficulty, rng: &mut impl RngCore) -> String {
    format!("{}-{:08X}", difficulty.tag(), rng.next_u32())
}

fn multiple_choice<R: Rng>(
    rng: &mut R,
    sentence: &str,
    ordinal: usize,
    difficulty: Difficulty,
    corpus: &Corpus,
) -> Question {
    let (blanked, answer) = match choose_target(rng, sentence, difficulty, &corpus.vocabulary) {
        Some(target) => (blank_word(sentence, target), target.to_string()),
        None => blank_first_word(sentence),
    };

    let mut options = vec![answer.clone()];
    options.extend(distractors(rng, &answer, difficulty, &corpus.vocabulary));
    let options = shuffle(rng, options);
    trace!(ordinal, answer = %answer, "multiple choice");

    Question {
        prompt: format!("Q{ordinal}: Complete the sentence: {blanked}"),
        options,
        answer,
    }
}

fn true_false<R: Rng>(
    rng: &mut R,
    sentence: &str,
    ordinal: usize,
    difficulty: Difficulty,
    corpus: &Corpus,
) -> Question {
    let statement = falsify(rng, sentence, difficulty, &corpus.vocabulary);
    trace!(ordinal, is_true = statement.is_true, "true/false");

    Question {
        prompt: format!("Q{ordinal}: {}", statement.text),
        options: vec![TRUE.to_string(), FALSE.to_string()],
        answer: if statement.is_true { TRUE } else { FALSE }.to_string(),
    }
}

/// Build the question list from an already segmented corpus.
///
/// Multiple-choice questions come first, drawn from the difficulty's
/// sentence pool; true/false questions follow, drawn from every sentence.
pub fn assemble<R: Rng>(
    rng: &mut R,
    corpus: &Corpus,
    mc_count: usize,
    tf_count: usize,
    difficulty: Difficulty,
    numbering: Numbering,
) -> Vec<Question> {
    let mc_pool = pool(&corpus.sentences, difficulty);
    debug!(pool = mc_pool.len(), mc_count, tf_count, %difficulty, "assembling questions");

    let mut questions = Vec::with_capacity(mc_count + tf_count);

    let mc_sentences = sample_with_replacement(rng, &mc_pool, mc_count);
    for (i, sentence) in mc_sentences.into_iter().enumerate() {
        questions.push(multiple_choice(rng, sentence, i + 1, difficulty, corpus));
    }

    let all: Vec<&str> = corpus.sentences.iter().map(String::as_str).collect();
    let tf_sentences = sample_with_replacement(rng, &all, tf_count);
    let offset = match numbering {
        Numbering::PerType => 0,
        Numbering::Global  => mc_count,
    };
    for (i, sentence) in tf_sentences.into_iter().enumerate() {
        questions.push(true_false(rng, sentence, offset + i + 1, difficulty, corpus));
    }

    questions
}

/// Turn raw text into `mc_count` multiple-choice and `tf_count` true/false
/// questions, numbered per type.
///
/// Never fails; degenerate input degrades to placeholder-backed questions.
pub fn generate_questions<R: Rng>(
    rng: &mut R,
    text: &str,
    mc_count: usize,
    tf_count: usize,
    difficulty: Difficulty,
) -> Vec<Question> {
    if mc_count == 0 && tf_count == 0 {
        return Vec::new();
    }
    let corpus = segment(text);
    assemble(rng, &corpus, mc_count, tf_count, difficulty, Numbering::PerType)
}

/// Core entry point: seeds the RNG and builds a [`Quiz`].
pub fn generate_quiz(request: QuizRequest) -> Quiz {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    let quiz_id = make_quiz_id(request.difficulty, &mut rng);
    let corpus = segment(&request.text);
    let questions = assemble(
        &mut rng,
        &corpus,
        request.mc_count,
        request.tf_count,
        request.difficulty,
        request.numbering,
    );

    Quiz {
        quiz_id,
        title: request.title.filter(|t| !t.trim().is_empty()),
        difficulty: request.difficulty,
        questions,
    }
}

/// [`generate_quiz`] behind the minimum-length check on the source text.
pub fn try_generate_quiz(request: QuizRequest) -> Result<Quiz, QuizError> {
    check_source_text(&request.text)?;
    Ok(generate_quiz(request))
}
