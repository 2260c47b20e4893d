//! The pipeline engine and report assembly.

use chrono::{DateTime, Utc};
use mizan_analysis::SituationClassifier;
use mizan_core::config::MizanConfig;
use mizan_core::constants::{
    ANALYST_AGENT, REFLECTION_AGENT, REPORT_DISCLAIMER, STAGE_DISCLAIMER, VALUES_AGENT,
};
use mizan_core::errors::MizanResult;
use mizan_core::models::{KnowledgeEntry, PipelineReport, ReportMeta, StageOutput, StageTrace};
use mizan_knowledge::KnowledgeIndex;
use mizan_interpret::ValueInterpreter;
use mizan_reflect::ReflectionGenerator;
use tracing::info;

const ANALYST_DESCRIPTION: &str =
    "Структурирует описание ситуации, выделяет участников, конфликты и последствия.";
const VALUES_DESCRIPTION: &str =
    "Сопоставляет ситуацию с этическими принципами, аятами Корана и хадисами.";
const REFLECTION_DESCRIPTION: &str =
    "Задаёт вопросы для размышления, помогает осознать мотивы и последствия.";

/// The full analysis pipeline. Builds the knowledge index once at
/// construction; afterwards the pipeline is immutable and can be shared
/// across concurrent invocations without locking.
pub struct Pipeline {
    index: KnowledgeIndex,
    classifier: SituationClassifier,
    reflector: ReflectionGenerator,
    config: MizanConfig,
}

impl Pipeline {
    /// Construct the pipeline over a corpus supplied by the host at
    /// startup. Fails only on invalid configuration.
    pub fn new(corpus: Vec<KnowledgeEntry>, config: MizanConfig) -> MizanResult<Self> {
        config.validate()?;
        let index = KnowledgeIndex::build(corpus, &config.retrieval);
        info!(entries = index.len(), "pipeline initialized");
        Ok(Self {
            index,
            classifier: SituationClassifier::new(),
            reflector: ReflectionGenerator::new(),
            config,
        })
    }

    /// Run the full four-state sequence and assemble the report.
    pub fn run(&self, situation: &str) -> MizanResult<PipelineReport> {
        let started = Utc::now();
        let mut stages: Vec<StageTrace> = Vec::with_capacity(3);

        // State 1: Classify.
        info!(agent = ANALYST_AGENT, "stage start");
        let (analysis, trace) = timed(ANALYST_AGENT, || self.classifier.classify(situation));
        stages.push(trace);

        // State 2: Interpret, over the classifier's full output.
        info!(agent = VALUES_AGENT, "stage start");
        let interpreter = ValueInterpreter::new(&self.index, self.config.retrieval.clone());
        let stage_started = Utc::now();
        let values = interpreter.interpret(situation, &analysis)?;
        stages.push(finish(VALUES_AGENT, stage_started));

        // State 3: Reflect, over both upstream outputs.
        info!(agent = REFLECTION_AGENT, "stage start");
        let (reflection, trace) = timed(REFLECTION_AGENT, || {
            self.reflector.reflect(situation, &analysis, &values)
        });
        stages.push(trace);

        // State 4: Assemble.
        let processing_time_seconds = round3(elapsed_seconds(started));
        info!(seconds = processing_time_seconds, "pipeline complete");

        Ok(PipelineReport {
            status: "success".to_string(),
            situation: situation.to_string(),
            analysis: envelope(ANALYST_AGENT, ANALYST_DESCRIPTION, analysis),
            values: envelope(VALUES_AGENT, VALUES_DESCRIPTION, values),
            reflection: envelope(REFLECTION_AGENT, REFLECTION_DESCRIPTION, reflection),
            meta: ReportMeta {
                processing_time_seconds,
                timestamp: started,
                agents_used: vec![
                    ANALYST_AGENT.to_string(),
                    VALUES_AGENT.to_string(),
                    REFLECTION_AGENT.to_string(),
                ],
                stages,
            },
            disclaimer: REPORT_DISCLAIMER.to_string(),
        })
    }

    /// Corpus statistics of the shared index.
    pub fn knowledge_stats(&self) -> mizan_core::models::KnowledgeStats {
        self.index.stats()
    }
}

fn envelope<T>(agent: &str, description: &str, result: T) -> StageOutput<T> {
    StageOutput {
        agent: agent.to_string(),
        description: description.to_string(),
        result,
        disclaimer: STAGE_DISCLAIMER.to_string(),
    }
}

fn timed<T>(agent: &str, f: impl FnOnce() -> T) -> (T, StageTrace) {
    let started = Utc::now();
    let value = f();
    (value, finish(agent, started))
}

fn finish(agent: &str, started: DateTime<Utc>) -> StageTrace {
    let duration_ms = (Utc::now() - started).num_milliseconds().max(0) as u64;
    StageTrace {
        agent: agent.to_string(),
        started_at: started,
        duration_ms,
    }
}

fn elapsed_seconds(started: DateTime<Utc>) -> f64 {
    (Utc::now() - started).num_microseconds().unwrap_or(0).max(0) as f64 / 1_000_000.0
}

fn round3(seconds: f64) -> f64 {
    (seconds * 1_000.0).round() / 1_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use mizan_knowledge::builtin_corpus;

    #[test]
    fn rejects_invalid_config() {
        let mut config = MizanConfig::default();
        config.retrieval.top_k = 0;
        assert!(Pipeline::new(builtin_corpus(), config).is_err());
    }

    #[test]
    fn report_lists_agents_in_invocation_order() {
        let pipeline = Pipeline::new(builtin_corpus(), MizanConfig::default()).unwrap();
        let report = pipeline.run("простая ситуация").unwrap();
        assert_eq!(
            report.meta.agents_used,
            vec![ANALYST_AGENT, VALUES_AGENT, REFLECTION_AGENT]
        );
        assert_eq!(report.meta.stages.len(), 3);
        assert_eq!(report.meta.stages[0].agent, ANALYST_AGENT);
    }

    #[test]
    fn empty_corpus_still_produces_a_full_report() {
        let pipeline = Pipeline::new(vec![], MizanConfig::default()).unwrap();
        let report = pipeline.run("любой текст").unwrap();
        assert_eq!(report.status, "success");
        assert!(report.values.result.relevant_sources.is_empty());
        assert_eq!(report.values.result.interpretations.len(), 1);
    }
}
