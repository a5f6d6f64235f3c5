use crate::shared::config::ClientConfig;
use contracts::domain::a001_email_classification::ClassificationResult;
use contracts::usecases::u501_classify_email::{
    interpret_response, ClassificationRequest, ClassifyError, FILE_FIELD,
};
use gloo_net::http::Request;
use web_sys::{File, FormData};

/// POST one classification request and wait for its single response.
///
/// Text goes as a JSON body, a file as multipart under [`FILE_FIELD`].
pub async fn classify(
    config: &ClientConfig,
    request: ClassificationRequest<File>,
) -> Result<ClassificationResult, ClassifyError> {
    let url = config.classify_url();

    let http_request = match &request {
        ClassificationRequest::Text(body) => Request::post(&url)
            .json(body)
            .map_err(|e| transport("failed to serialize request", e))?,
        ClassificationRequest::File(file) => {
            let form_data = FormData::new()
                .map_err(|e| ClassifyError::Transport(format!("FormData: {e:?}")))?;
            form_data
                .append_with_blob_and_filename(FILE_FIELD, &file.handle, &file.name)
                .map_err(|e| ClassifyError::Transport(format!("FormData append: {e:?}")))?;
            Request::post(&url)
                .body(form_data)
                .map_err(|e| transport("failed to build multipart request", e))?
        }
    };

    let response = http_request
        .send()
        .await
        .map_err(|e| transport("failed to send request", e))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| transport("failed to read response", e))?;

    interpret_response(status, &body)
}

fn transport(stage: &str, err: gloo_net::Error) -> ClassifyError {
    ClassifyError::Transport(format!("{stage}: {err}"))
}
