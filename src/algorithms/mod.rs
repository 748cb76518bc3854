pub mod ecc;
pub mod rsa;

use crate::models::Algorithm;
use crate::CostModel;

pub fn model_for(algorithm: Algorithm) -> &'static dyn CostModel {
    match algorithm {
        Algorithm::Ecc => &ecc::EccModel,
        Algorithm::Rsa => &rsa::RsaModel,
    }
}
