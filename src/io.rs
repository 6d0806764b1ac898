use std::io::{Read, Write};

use log::{debug, info};
use serde::Serialize;
use serde_json::Value;

use crate::error::PaymentResourceError;
use crate::payment::PaymentResource;
use crate::timestamp;

#[derive(Debug, Serialize)]
pub struct PaymentSummary {
    pub id: Option<String>,
    pub transaction_type: Option<&'static str>,
    pub amount: Option<String>,
    pub currency: Option<String>,
    pub receiver: Option<String>,
    pub receiver_iban: Option<String>,
    pub created_date_time: Option<String>,
}

impl From<&PaymentResource> for PaymentSummary {
    fn from(resource: &PaymentResource) -> Self {
        Self {
            id: resource.id.clone(),
            transaction_type: resource.transaction_type.map(|tx_type| tx_type.as_str()),
            amount: resource.amount.map(|amount| amount.to_string()),
            currency: resource.currency.clone(),
            receiver: resource.receiver.clone(),
            receiver_iban: resource.receiver_iban.clone(),
            created_date_time: resource.created_date_time.as_ref().map(timestamp::format),
        }
    }
}

pub fn read_resources<R: Read>(reader: R) -> Result<Vec<PaymentResource>, PaymentResourceError> {
    let value: Value = serde_json::from_reader(reader)?;

    let resources = match value {
        Value::Array(items) => items
            .into_iter()
            .map(PaymentResource::from_value)
            .collect::<Result<Vec<_>, _>>()?,
        other => vec![PaymentResource::from_value(other)?],
    };

    debug!("decoded {} payment resource(s)", resources.len());
    Ok(resources)
}

pub fn write_json<W: Write>(
    mut writer: W,
    resources: &[PaymentResource],
) -> Result<(), PaymentResourceError> {
    serde_json::to_writer_pretty(&mut writer, resources)?;
    writeln!(writer)?;
    writer.flush()?;
    info!("wrote {} payment resource(s) as json", resources.len());
    Ok(())
}

pub fn write_summary<W: Write>(
    writer: W,
    resources: &[PaymentResource],
) -> Result<(), PaymentResourceError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for resource in resources {
        csv_writer.serialize(PaymentSummary::from(resource))?;
    }

    csv_writer.flush()?;
    info!("wrote summary for {} payment resource(s)", resources.len());
    Ok(())
}
