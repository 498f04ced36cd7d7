//! Simulated external integrations
//!
//! Coverage-eligibility and laboratory-order collaborators behind
//! `async-trait` seams. The simulated implementations stand in for the
//! real services: a small artificial delay and a randomized outcome, so
//! callers exercise the same error paths they would in production.
//! [`call_with_timeout`] bounds any integration call and surfaces a
//! typed timeout instead of hanging.

use crate::domain::{IntegrationError, Result};
use async_trait::async_trait;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use uuid::Uuid;

/// Insurance coverage eligibility answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageDecision {
    /// Whether the plan covers the requested care
    pub eligible: bool,
    /// Plan label as reported by the insurer
    pub plan: String,
}

/// Acknowledgement for a submitted laboratory order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabOrderReceipt {
    /// Protocol assigned by the laboratory
    pub protocol: String,
    /// Examination that was ordered
    pub examination: String,
}

/// Insurance coverage-eligibility service
#[async_trait]
pub trait CoverageApi: Send + Sync {
    /// Checks whether the patient identified by `cpf` is covered under `plan`
    async fn check_eligibility(
        &self,
        cpf: &str,
        plan: &str,
    ) -> std::result::Result<CoverageDecision, IntegrationError>;
}

/// Laboratory order-intake service
#[async_trait]
pub trait LabApi: Send + Sync {
    /// Submits an examination order for the patient identified by `cpf`
    async fn submit_order(
        &self,
        cpf: &str,
        examination: &str,
    ) -> std::result::Result<LabOrderReceipt, IntegrationError>;
}

/// Simulated insurer endpoint
///
/// Answers after a fixed delay; a configurable fraction of calls fails
/// with `Unavailable` to exercise retry paths.
#[derive(Debug, Clone)]
pub struct SimulatedCoverageApi {
    delay: Duration,
    failure_rate: f64,
}

impl SimulatedCoverageApi {
    pub fn new(delay: Duration, failure_rate: f64) -> Self {
        Self {
            delay,
            failure_rate: failure_rate.clamp(0.0, 1.0),
        }
    }

    /// A well-behaved instance that always answers
    pub fn reliable() -> Self {
        Self::new(Duration::from_millis(50), 0.0)
    }
}

impl Default for SimulatedCoverageApi {
    fn default() -> Self {
        Self::new(Duration::from_millis(200), 0.1)
    }
}

#[async_trait]
impl CoverageApi for SimulatedCoverageApi {
    async fn check_eligibility(
        &self,
        cpf: &str,
        plan: &str,
    ) -> std::result::Result<CoverageDecision, IntegrationError> {
        tokio::time::sleep(self.delay).await;
        if rand::thread_rng().gen_bool(self.failure_rate) {
            return Err(IntegrationError::Unavailable(
                "operadora fora do ar".to_string(),
            ));
        }
        if cpf.is_empty() {
            return Err(IntegrationError::Rejected(
                "CPF ausente na consulta de cobertura".to_string(),
            ));
        }
        // Out-of-pocket patients have nothing to verify with an insurer.
        Ok(CoverageDecision {
            eligible: !plan.eq_ignore_ascii_case("particular"),
            plan: plan.to_string(),
        })
    }
}

/// Simulated laboratory endpoint
#[derive(Debug, Clone)]
pub struct SimulatedLabApi {
    delay: Duration,
    failure_rate: f64,
}

impl SimulatedLabApi {
    pub fn new(delay: Duration, failure_rate: f64) -> Self {
        Self {
            delay,
            failure_rate: failure_rate.clamp(0.0, 1.0),
        }
    }

    pub fn reliable() -> Self {
        Self::new(Duration::from_millis(50), 0.0)
    }
}

impl Default for SimulatedLabApi {
    fn default() -> Self {
        Self::new(Duration::from_millis(200), 0.1)
    }
}

#[async_trait]
impl LabApi for SimulatedLabApi {
    async fn submit_order(
        &self,
        cpf: &str,
        examination: &str,
    ) -> std::result::Result<LabOrderReceipt, IntegrationError> {
        tokio::time::sleep(self.delay).await;
        if rand::thread_rng().gen_bool(self.failure_rate) {
            return Err(IntegrationError::Unavailable(
                "laboratório fora do ar".to_string(),
            ));
        }
        if cpf.is_empty() || examination.trim().is_empty() {
            return Err(IntegrationError::Rejected(
                "pedido de exame incompleto".to_string(),
            ));
        }
        Ok(LabOrderReceipt {
            protocol: Uuid::new_v4().to_string(),
            examination: examination.trim().to_string(),
        })
    }
}

/// Bounds an integration call with a deadline
///
/// A call that outlives `deadline` is dropped and reported as a typed
/// `Timeout` instead of hanging the caller.
///
/// # Errors
///
/// `Integration(Timeout)` when the deadline elapses, otherwise whatever
/// the wrapped call returns.
pub async fn call_with_timeout<T, F>(deadline: Duration, call: F) -> Result<T>
where
    F: Future<Output = std::result::Result<T, IntegrationError>>,
{
    match tokio::time::timeout(deadline, call).await {
        Ok(outcome) => Ok(outcome?),
        Err(_) => Err(IntegrationError::Timeout(format!("{deadline:?}")).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HospitalError;

    #[tokio::test]
    async fn test_coverage_check_for_insured_patient() {
        let api = SimulatedCoverageApi::reliable();
        let decision = api.check_eligibility("52998224725", "Unimed").await.unwrap();
        assert!(decision.eligible);
        assert_eq!(decision.plan, "Unimed");
    }

    #[tokio::test]
    async fn test_out_of_pocket_plan_is_not_eligible() {
        let api = SimulatedCoverageApi::reliable();
        let decision = api
            .check_eligibility("52998224725", "Particular")
            .await
            .unwrap();
        assert!(!decision.eligible);
    }

    #[tokio::test]
    async fn test_empty_cpf_is_rejected() {
        let api = SimulatedCoverageApi::reliable();
        let err = api.check_eligibility("", "Unimed").await.unwrap_err();
        assert!(matches!(err, IntegrationError::Rejected(_)));
    }

    #[tokio::test]
    async fn test_lab_order_receives_a_protocol() {
        let api = SimulatedLabApi::reliable();
        let receipt = api
            .submit_order("52998224725", "Hemograma completo")
            .await
            .unwrap();
        assert!(!receipt.protocol.is_empty());
        assert_eq!(receipt.examination, "Hemograma completo");
    }

    #[tokio::test]
    async fn test_always_failing_service_surfaces_unavailable() {
        let api = SimulatedLabApi::new(Duration::from_millis(1), 1.0);
        let err = api.submit_order("52998224725", "Glicemia").await.unwrap_err();
        assert!(matches!(err, IntegrationError::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_slow_call_times_out() {
        let api = SimulatedCoverageApi::new(Duration::from_secs(5), 0.0);
        let err = call_with_timeout(
            Duration::from_millis(20),
            api.check_eligibility("52998224725", "Unimed"),
        )
        .await
        .unwrap_err();
        assert!(matches!(
            err,
            HospitalError::Integration(IntegrationError::Timeout(_))
        ));
    }

    #[tokio::test]
    async fn test_fast_call_passes_through() {
        let api = SimulatedCoverageApi::reliable();
        let decision = call_with_timeout(
            Duration::from_secs(1),
            api.check_eligibility("52998224725", "Unimed"),
        )
        .await
        .unwrap();
        assert!(decision.eligible);
    }
}
