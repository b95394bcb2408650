//! Amazon CloudSearch configuration API (`cloudsearch`, AWS Query, 2013-01-01).

use super::{Member, Operation, Protocol, ServiceModel};

pub static SERVICE: ServiceModel = ServiceModel {
    name: "CloudSearch",
    endpoint_prefix: "cloudsearch",
    signing_name: "cloudsearch",
    api_version: "2013-01-01",
    protocol: Protocol::AwsQuery,
    target_prefix: None,
    env_suffix: "CLOUDSEARCH",
    operations: &[
        &BUILD_SUGGESTERS,
        &CREATE_DOMAIN,
        &DEFINE_ANALYSIS_SCHEME,
        &DEFINE_EXPRESSION,
        &DEFINE_INDEX_FIELD,
        &DEFINE_SUGGESTER,
        &DELETE_ANALYSIS_SCHEME,
        &DELETE_DOMAIN,
        &DELETE_EXPRESSION,
        &DELETE_INDEX_FIELD,
        &DELETE_SUGGESTER,
        &DESCRIBE_ANALYSIS_SCHEMES,
        &DESCRIBE_AVAILABILITY_OPTIONS,
        &DESCRIBE_DOMAIN_ENDPOINT_OPTIONS,
        &DESCRIBE_DOMAINS,
        &DESCRIBE_EXPRESSIONS,
        &DESCRIBE_INDEX_FIELDS,
        &DESCRIBE_SCALING_PARAMETERS,
        &DESCRIBE_SERVICE_ACCESS_POLICIES,
        &DESCRIBE_SUGGESTERS,
        &INDEX_DOCUMENTS,
        &LIST_DOMAIN_NAMES,
        &UPDATE_AVAILABILITY_OPTIONS,
        &UPDATE_DOMAIN_ENDPOINT_OPTIONS,
        &UPDATE_SCALING_PARAMETERS,
        &UPDATE_SERVICE_ACCESS_POLICIES,
    ],
};

const DOMAIN: Member = Member::body("DomainName").required();
const DEPLOYED: Member = Member::body("Deployed");

pub const BUILD_SUGGESTERS: Operation = rpc!("BuildSuggesters", [DOMAIN]);

pub const CREATE_DOMAIN: Operation = rpc!("CreateDomain", [DOMAIN]);

pub const DEFINE_ANALYSIS_SCHEME: Operation = rpc!(
    "DefineAnalysisScheme",
    [DOMAIN, Member::body("AnalysisScheme").required()]
);

pub const DEFINE_EXPRESSION: Operation = rpc!(
    "DefineExpression",
    [DOMAIN, Member::body("Expression").required()]
);

pub const DEFINE_INDEX_FIELD: Operation = rpc!(
    "DefineIndexField",
    [DOMAIN, Member::body("IndexField").required()]
);

pub const DEFINE_SUGGESTER: Operation = rpc!(
    "DefineSuggester",
    [DOMAIN, Member::body("Suggester").required()]
);

pub const DELETE_ANALYSIS_SCHEME: Operation = rpc!(
    "DeleteAnalysisScheme",
    [DOMAIN, Member::body("AnalysisSchemeName").required()]
);

pub const DELETE_DOMAIN: Operation = rpc!("DeleteDomain", [DOMAIN]);

pub const DELETE_EXPRESSION: Operation = rpc!(
    "DeleteExpression",
    [DOMAIN, Member::body("ExpressionName").required()]
);

pub const DELETE_INDEX_FIELD: Operation = rpc!(
    "DeleteIndexField",
    [DOMAIN, Member::body("IndexFieldName").required()]
);

pub const DELETE_SUGGESTER: Operation = rpc!(
    "DeleteSuggester",
    [DOMAIN, Member::body("SuggesterName").required()]
);

pub const DESCRIBE_ANALYSIS_SCHEMES: Operation = rpc!(
    "DescribeAnalysisSchemes",
    [DOMAIN, Member::body("AnalysisSchemeNames"), DEPLOYED]
);

pub const DESCRIBE_AVAILABILITY_OPTIONS: Operation =
    rpc!("DescribeAvailabilityOptions", [DOMAIN, DEPLOYED]);

pub const DESCRIBE_DOMAIN_ENDPOINT_OPTIONS: Operation =
    rpc!("DescribeDomainEndpointOptions", [DOMAIN, DEPLOYED]);

pub const DESCRIBE_DOMAINS: Operation = rpc!("DescribeDomains", [Member::body("DomainNames")]);

pub const DESCRIBE_EXPRESSIONS: Operation = rpc!(
    "DescribeExpressions",
    [DOMAIN, Member::body("ExpressionNames"), DEPLOYED]
);

pub const DESCRIBE_INDEX_FIELDS: Operation = rpc!(
    "DescribeIndexFields",
    [DOMAIN, Member::body("FieldNames"), DEPLOYED]
);

pub const DESCRIBE_SCALING_PARAMETERS: Operation = rpc!("DescribeScalingParameters", [DOMAIN]);

pub const DESCRIBE_SERVICE_ACCESS_POLICIES: Operation =
    rpc!("DescribeServiceAccessPolicies", [DOMAIN, DEPLOYED]);

pub const DESCRIBE_SUGGESTERS: Operation = rpc!(
    "DescribeSuggesters",
    [DOMAIN, Member::body("SuggesterNames"), DEPLOYED]
);

pub const INDEX_DOCUMENTS: Operation = rpc!("IndexDocuments", [DOMAIN]);

pub const LIST_DOMAIN_NAMES: Operation = rpc!("ListDomainNames", []);

pub const UPDATE_AVAILABILITY_OPTIONS: Operation = rpc!(
    "UpdateAvailabilityOptions",
    [DOMAIN, Member::body("MultiAZ").required()]
);

pub const UPDATE_DOMAIN_ENDPOINT_OPTIONS: Operation = rpc!(
    "UpdateDomainEndpointOptions",
    [DOMAIN, Member::body("DomainEndpointOptions").required()]
);

pub const UPDATE_SCALING_PARAMETERS: Operation = rpc!(
    "UpdateScalingParameters",
    [DOMAIN, Member::body("ScalingParameters").required()]
);

pub const UPDATE_SERVICE_ACCESS_POLICIES: Operation = rpc!(
    "UpdateServiceAccessPolicies",
    [DOMAIN, Member::body("AccessPolicies").required()]
);
