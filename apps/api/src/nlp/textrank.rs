//! TextRank keyphrase ranking.
//!
//! Rankable tokens (nouns, proper nouns, adjectives that are not stop words)
//! become vertices; tokens co-occurring within a small window of the same
//! sentence share an edge. Vertex ranks come from weighted PageRank, and a
//! candidate phrase is scored from the ranks of its tokens, discounted for the
//! tokens that are not in the graph.

use std::collections::HashMap;

use super::lexicon::STOP_WORDS;
use super::{Sentence, Span};

const WINDOW: usize = 3;
const DAMPING: f64 = 0.85;
const MAX_ITERATIONS: usize = 100;
const TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedPhrase {
    pub text: String,
    pub rank: f64,
}

/// Ranks candidate spans and returns them best first, one entry per distinct
/// lower-cased phrase. Ties keep first-occurrence order.
pub fn rank_phrases(sentences: &[Sentence<'_>], candidates: &[Span]) -> Vec<RankedPhrase> {
    let graph = Graph::build(sentences);
    let ranks = graph.pagerank();

    let mut best: HashMap<String, usize> = HashMap::new();
    let mut phrases: Vec<RankedPhrase> = Vec::new();

    for span in candidates {
        let Some(rank) = phrase_rank(sentences, span, &graph.index, &ranks) else {
            continue;
        };
        let text = span.text(sentences).to_string();
        let key = text.to_lowercase();

        match best.get(&key) {
            Some(&pos) => {
                if rank > phrases[pos].rank {
                    phrases[pos].rank = rank;
                }
            }
            None => {
                best.insert(key, phrases.len());
                phrases.push(RankedPhrase { text, rank });
            }
        }
    }

    // stable sort keeps first-occurrence order among equal ranks
    phrases.sort_by(|a, b| b.rank.total_cmp(&a.rank));
    phrases
}

fn is_vertex(sentence: &Sentence<'_>, idx: usize) -> bool {
    let tagged = &sentence.tokens[idx];
    tagged.tag.is_rankable() && !STOP_WORDS.contains(tagged.token.lower.as_str())
}

fn phrase_rank(
    sentences: &[Sentence<'_>],
    span: &Span,
    index: &HashMap<String, usize>,
    ranks: &[f64],
) -> Option<f64> {
    let sentence = &sentences[span.sentence];
    let len = span.end - span.start;

    let mut sum_rank = 0.0;
    let mut lemmas = 0usize;
    for idx in span.start..span.end {
        if !is_vertex(sentence, idx) {
            continue;
        }
        if let Some(&v) = index.get(sentence.tokens[idx].token.lower.as_str()) {
            sum_rank += ranks[v];
            lemmas += 1;
        }
    }
    if lemmas == 0 {
        return None;
    }

    let non_lemma = (len - lemmas) as f64;
    let discount = non_lemma / (lemmas as f64 + 1.0);
    Some((sum_rank / (len as f64 + discount)).sqrt())
}

struct Graph {
    index: HashMap<String, usize>,
    /// Adjacency as (neighbour, weight), symmetric.
    edges: Vec<HashMap<usize, f64>>,
}

impl Graph {
    fn build(sentences: &[Sentence<'_>]) -> Self {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut edges: Vec<HashMap<usize, f64>> = Vec::new();

        for sentence in sentences {
            let vertices: Vec<(usize, usize)> = (0..sentence.tokens.len())
                .filter(|&i| is_vertex(sentence, i))
                .map(|i| {
                    let lower = &sentence.tokens[i].token.lower;
                    let next_id = index.len();
                    let id = *index.entry(lower.clone()).or_insert(next_id);
                    if id == edges.len() {
                        edges.push(HashMap::new());
                    }
                    (i, id)
                })
                .collect();

            for (a, &(pos_a, id_a)) in vertices.iter().enumerate() {
                for &(pos_b, id_b) in &vertices[a + 1..] {
                    if pos_b - pos_a >= WINDOW {
                        break;
                    }
                    if id_a == id_b {
                        continue;
                    }
                    *edges[id_a].entry(id_b).or_insert(0.0) += 1.0;
                    *edges[id_b].entry(id_a).or_insert(0.0) += 1.0;
                }
            }
        }

        Self { index, edges }
    }

    fn pagerank(&self) -> Vec<f64> {
        let n = self.edges.len();
        if n == 0 {
            return Vec::new();
        }

        let out_weight: Vec<f64> = self.edges.iter().map(|e| e.values().sum()).collect();
        let base = (1.0 - DAMPING) / n as f64;
        let mut ranks = vec![1.0 / n as f64; n];

        for _ in 0..MAX_ITERATIONS {
            let mut next = vec![base; n];
            for (v, neighbours) in self.edges.iter().enumerate() {
                for (&u, &w) in neighbours {
                    next[v] += DAMPING * ranks[u] * w / out_weight[u];
                }
            }

            let delta: f64 = next.iter().zip(&ranks).map(|(a, b)| (a - b).abs()).sum();
            ranks = next;
            if delta < TOLERANCE {
                break;
            }
        }

        ranks
    }
}
