/// Constants used throughout the ssmenv codebase
// Reference prefix marking a value that lives in Parameter Store
pub const SSM_PREFIX: &str = "ssm:";

// Default file names
pub const DEFAULT_INPUT_FILE: &str = ".env.example";
pub const DEFAULT_OUTPUT_FILE: &str = ".env.local";

// Default AWS region when neither a flag nor AWS_REGION is set
pub const DEFAULT_AWS_REGION: &str = "us-east-1";

// Environment variable names
pub const INPUT_FILE_VAR: &str = "INPUT_FILE";
pub const OUTPUT_FILE_VAR: &str = "OUTPUT_FILE";
pub const AWS_REGION_VAR: &str = "AWS_REGION";
pub const AWS_ENDPOINT_URL_SSM_VAR: &str = "AWS_ENDPOINT_URL_SSM";
pub const SSMENV_LOG_VAR: &str = "SSMENV_LOG";

// GetParameters accepts at most this many names per request
pub const SSM_MAX_NAMES_PER_REQUEST: usize = 10;
