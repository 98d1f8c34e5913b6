use super::base::Backend;
use super::bridge::BridgeBackend;
use super::openai::OpenAiBackend;
use super::resolver::BackendTarget;
use crate::errors::BackendResult;

pub fn get_backend(target: BackendTarget) -> BackendResult<Box<dyn Backend + Send + Sync>> {
    match target {
        BackendTarget::Bridge { url } => Ok(Box::new(BridgeBackend::new(url)?)),
        BackendTarget::OpenAi(config) => Ok(Box::new(OpenAiBackend::new(config)?)),
    }
}
