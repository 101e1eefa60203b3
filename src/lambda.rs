use cpf_validator::adapters::lambda::{
    handle_api_gateway_request, ApiGatewayRequest, ApiGatewayResponse,
};
use cpf_validator::utils::logger;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

async fn function_handler(event: LambdaEvent<ApiGatewayRequest>) -> Result<ApiGatewayResponse, Error> {
    tracing::debug!(request_id = %event.context.request_id, "Received API Gateway event");

    Ok(handle_api_gateway_request(&event.payload))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
